// cascade/src/core/control.rs

//! Defines the outcome of a pipeline run.

/// Outcome of a full pipeline execution.
///
/// A run that fails terminally does not produce a `PipelineOutcome` at all;
/// it surfaces the failing step's error through `Pipeline::run`'s `Err` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome<T> {
  /// Every step succeeded; carries the final accumulator value produced by
  /// the last step.
  Completed(T),
  /// The pipeline contained no steps. This is the explicit "no result"
  /// outcome for the degenerate empty pipeline; it is not an error.
  Empty,
}

impl<T> PipelineOutcome<T> {
  /// Returns the final value, or `None` for the empty-pipeline outcome.
  pub fn into_value(self) -> Option<T> {
    match self {
      PipelineOutcome::Completed(value) => Some(value),
      PipelineOutcome::Empty => None,
    }
  }

  /// Borrowing accessor for the final value.
  pub fn value(&self) -> Option<&T> {
    match self {
      PipelineOutcome::Completed(value) => Some(value),
      PipelineOutcome::Empty => None,
    }
  }

  /// True for the empty-pipeline outcome.
  pub fn is_empty(&self) -> bool {
    matches!(self, PipelineOutcome::Empty)
  }
}
