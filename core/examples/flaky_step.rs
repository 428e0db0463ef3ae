// cascade_core/examples/flaky_step.rs

use cascade::{CascadeError, Pipeline, PipelineOutcome, RetryPolicy};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

// Demonstrates the retry policy: a step that fails transiently twice is
// retried with the same input and recovers; the caller never sees the
// transient failures.

#[tokio::main]
async fn main() -> Result<(), CascadeError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).init();

  info!("--- Flaky Step Example ---");

  let attempts = Arc::new(AtomicUsize::new(0));
  let attempts_for_step = attempts.clone();

  let pipeline = Pipeline::<u64, CascadeError>::new()
    // The default policy waits 2000ms between attempts; shrink it so the
    // example finishes quickly.
    .with_retry_policy(RetryPolicy::new().with_delay(Duration::from_millis(100)))
    .source("seed", || async { Ok::<_, CascadeError>(21) })
    .then("flaky_double", move |v: u64| {
      let attempt = attempts_for_step.fetch_add(1, Ordering::SeqCst) + 1;
      async move {
        if attempt <= 2 {
          info!("attempt {} failing transiently (input {})", attempt, v);
          Err(CascadeError::from(anyhow::anyhow!("transient glitch")))
        } else {
          info!("attempt {} succeeding (input {})", attempt, v);
          Ok(v * 2)
        }
      }
    });

  match pipeline.run().await? {
    PipelineOutcome::Completed(value) => info!(
      "Recovered after {} attempts, final value = {}",
      attempts.load(Ordering::SeqCst),
      value
    ),
    PipelineOutcome::Empty => info!("Pipeline was empty."),
  }

  Ok(())
}
