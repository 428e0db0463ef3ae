// cascade/src/pipeline/execution.rs

//! Contains the `Pipeline::run()` method, responsible for executing the
//! pipeline's steps in order, threading the accumulator from each step into
//! the next and delegating every single-step invocation to the retry policy.

use crate::core::control::PipelineOutcome;
use crate::core::step::StepKind;
use crate::error::CascadeError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Level};

impl<T, Err> Pipeline<T, Err>
where
  T: Clone + Send + Sync + 'static,
  Err: std::error::Error + From<CascadeError> + Send + Sync + 'static,
{
  /// Executes the pipeline.
  ///
  /// Steps run strictly sequentially: step `i + 1` never begins before step
  /// `i` has fully succeeded, including all of its retries. A terminal
  /// failure (retry budget exhausted) aborts the run immediately: no
  /// subsequent step executes, no rollback of already-succeeded steps is
  /// attempted, and the failing step's last error is returned unchanged.
  ///
  /// An empty pipeline returns `Ok(PipelineOutcome::Empty)` without invoking
  /// anything; this is the explicit "no result" outcome, not an error.
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            pipeline_value_type = %std::any::type_name::<T>(),
            pipeline_error_type = %std::any::type_name::<Err>(),
            num_steps = self.steps.len(),
        ),
        err(Display)
    )]
  pub async fn run(&self) -> Result<PipelineOutcome<T>, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    if self.steps.is_empty() {
      event!(Level::DEBUG, "Pipeline is empty; nothing to execute.");
      return Ok(PipelineOutcome::Empty);
    }

    // Loop-local accumulator threaded between steps. Deliberately iterative
    // rather than recursive so long pipelines cost no stack depth.
    let mut acc: Option<T> = None;

    for (step_idx, step_def) in self.steps.iter().enumerate() {
      let step_name_str = step_def.name.as_str();

      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_name = step_name_str,
        step_index = step_idx,
      );
      let _step_span_guard = step_span.enter();
      event!(Level::DEBUG, "Processing step.");

      let produced = match &step_def.kind {
        StepKind::Source(source_fn) => self.retry.run(step_name_str, || source_fn()).await?,
        StepKind::Transform(transform_fn) => {
          // The accumulator is retained here for the whole step, so every
          // retry attempt receives a clone of the identical input value.
          let input = match acc.take() {
            Some(value) => value,
            None => {
              event!(Level::ERROR, "First step is a transform; no source to feed it.");
              return Err(Err::from(CascadeError::SourceMissing {
                step_name: step_def.name.clone(),
              }));
            }
          };
          self
            .retry
            .run(step_name_str, || transform_fn(input.clone()))
            .await?
        }
      };

      acc = Some(produced);
      event!(Level::DEBUG, "Step processing finished successfully.");
    } // End of loop over steps

    match acc {
      Some(final_value) => {
        event!(Level::DEBUG, "Pipeline execution completed successfully.");
        Ok(PipelineOutcome::Completed(final_value))
      }
      // Unreachable: the loop ran at least once and every arm stores a value.
      None => Err(Err::from(CascadeError::Internal(
        "pipeline finished without producing a final value".to_string(),
      ))),
    }
  }
}
