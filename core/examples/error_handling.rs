// cascade_core/examples/error_handling.rs

use cascade::{CascadeError, Pipeline, RetryPolicy};
use std::time::Duration;
use tracing::{error, info};

// 1. Define a custom application error type
#[derive(Debug, thiserror::Error)]
enum ExampleAppError {
  #[error("A custom application error occurred: {0}")]
  CustomError(String),

  #[error("Cascade framework error during pipeline execution: {0}")]
  CascadeFramework(#[from] CascadeError), // Allows CascadeError to be converted into ExampleAppError
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();
  info!("--- Error Handling Example ---");

  // Scenario 1: A step fails on every attempt; the terminal failure carries
  // the last attempt's error, and downstream steps never run.
  info!("Scenario 1: terminal step failure aborts the run");
  run_pipeline_with_terminal_failure().await;

  // Scenario 2: A pipeline misconfigured to start with a transform surfaces
  // a framework error through the custom error type's From impl.
  info!("Scenario 2: configuration error (no source step)");
  run_pipeline_without_source().await;
}

async fn run_pipeline_with_terminal_failure() {
  // A short delay keeps the demonstration snappy; the default policy waits
  // 2000ms between attempts.
  let pipeline = Pipeline::<i32, ExampleAppError>::new()
    .with_retry_policy(RetryPolicy::new().with_budget(1).with_delay(Duration::from_millis(100)))
    .source("seed", || async { Ok::<_, ExampleAppError>(1) })
    .then("unreliable", |_v: i32| async move {
      Err::<i32, _>(ExampleAppError::CustomError("upstream rejected the request".into()))
    })
    .then("never_reached", |v: i32| async move {
      info!("this step never runs");
      Ok::<_, ExampleAppError>(v)
    });

  match pipeline.run().await {
    Ok(outcome) => info!("Unexpected success: {:?}", outcome.into_value()),
    Err(ExampleAppError::CustomError(msg)) => {
      error!("Run failed with the step's own error, unmodified: {}", msg)
    }
    Err(other) => error!("Run failed: {}", other),
  }
}

async fn run_pipeline_without_source() {
  let pipeline = Pipeline::<i32, ExampleAppError>::new()
    .then("orphan_transform", |v: i32| async move { Ok::<_, ExampleAppError>(v) });

  match pipeline.run().await {
    Ok(outcome) => info!("Unexpected success: {:?}", outcome.into_value()),
    Err(ExampleAppError::CascadeFramework(ce)) => {
      error!("Framework error surfaced through ExampleAppError: {}", ce)
    }
    Err(other) => error!("Run failed: {}", other),
  }
}
