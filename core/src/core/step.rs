// cascade/src/core/step.rs

//! Defines the structure for a single step within a pipeline.
//!
//! A step is an asynchronous unit of work. The first step of a pipeline is a
//! nullary *source* that produces the initial accumulator value; every
//! subsequent step is a unary *transform* that consumes the value produced by
//! its predecessor and yields the next one.

use std::future::Future;
use std::pin::Pin;

/// Type alias for a nullary source step.
///
/// A source takes no input and returns a `Future` resolving to
/// `Result<T, Err>`, where `T` is the pipeline's accumulator type.
pub type SourceFn<T, Err> =
  Box<dyn Fn() -> Pin<Box<dyn Future<Output = Result<T, Err>> + Send>> + Send + Sync>;

/// Type alias for a unary transform step.
///
/// A transform takes ownership of the accumulator produced by the previous
/// step and returns a `Future` resolving to `Result<T, Err>`. Because a
/// failed attempt may be retried, the pipeline re-presents a clone of the
/// same input on every attempt; the transform never observes a value derived
/// from a different upstream run.
pub type TransformFn<T, Err> =
  Box<dyn Fn(T) -> Pin<Box<dyn Future<Output = Result<T, Err>> + Send>> + Send + Sync>;

/// The callable body of a step: either a source or a transform.
pub enum StepKind<T, Err> {
  /// Nullary producer of the initial accumulator. Only valid in position 0.
  Source(SourceFn<T, Err>),
  /// Unary transformer of the accumulator threaded from the previous step.
  Transform(TransformFn<T, Err>),
}

/// Definition of a pipeline step: its name plus its callable body.
pub struct StepDef<T, Err> {
  pub name: String,
  pub(crate) kind: StepKind<T, Err>,
}

impl<T, Err> StepDef<T, Err> {
  /// Whether this step is a nullary source.
  pub fn is_source(&self) -> bool {
    matches!(self.kind, StepKind::Source(_))
  }
}

// Manual implementation of Debug: the boxed closures inside StepKind don't
// implement Debug, so we print a placeholder for the body.
impl<T, Err> std::fmt::Debug for StepDef<T, Err> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StepDef")
      .field("name", &self.name)
      .field(
        "kind",
        &if self.is_source() { "Source" } else { "Transform" },
      )
      .finish()
  }
}
