// cascade_core/examples/basic_pipeline.rs

use cascade::{CascadeError, Pipeline, PipelineOutcome};
use tracing::info;

// A basic waterfall: the source produces an order id, each transform enriches
// the value produced by its predecessor. For simplicity this example uses
// CascadeError directly as the pipeline's error type; real applications would
// typically define a custom error:
//   #[derive(Debug, thiserror::Error)]
//   enum MyError { #[error("Cascade: {0}")] Cascade(#[from] CascadeError), /* ... */ }

#[tokio::main]
async fn main() -> Result<(), CascadeError> {
  // Initialize tracing (optional, for demonstration)
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- Basic Pipeline Example ---");

  let pipeline = Pipeline::<String, CascadeError>::new()
    .source("fetch_order", || async {
      info!("fetch_order executed");
      Ok::<_, CascadeError>("order-42".to_string())
    })
    .then("normalize", |order: String| async move {
      info!("normalize executed: input = {}", order);
      Ok::<_, CascadeError>(order.to_uppercase())
    })
    .then("render_receipt", |order: String| async move {
      info!("render_receipt executed: input = {}", order);
      Ok::<_, CascadeError>(format!("receipt for {}", order))
    });

  match pipeline.run().await? {
    PipelineOutcome::Completed(receipt) => info!("Pipeline completed: {}", receipt),
    PipelineOutcome::Empty => info!("Pipeline was empty, no result."),
  }

  Ok(())
}
