// cascade/src/pipeline/definition.rs

//! Contains the `Pipeline<T, Err>` struct definition and the builder methods
//! for its construction.

use crate::core::step::{SourceFn, StepDef, StepKind, TransformFn};
use crate::retry::RetryPolicy;
use std::future::Future;

/// The core Pipeline type, generic over the accumulator type `T` threaded
/// between steps and an error type `Err` that its steps return.
///
/// `T` must be `Clone + Send + Sync + 'static`: a failed attempt of a step is
/// retried with the *same* input, so the pipeline retains the accumulator it
/// handed to a step until that step has succeeded, cloning it per attempt.
///
/// `Err` must be `std::error::Error + Send + Sync + 'static` and additionally
/// `From<crate::error::CascadeError>`, so the pipeline can surface its own
/// configuration errors (e.g. a transform in position 0) through the caller's
/// error type.
pub struct Pipeline<T, Err>
where
  T: Clone + Send + Sync + 'static,
  Err: std::error::Error + From<crate::error::CascadeError> + Send + Sync + 'static,
{
  /// Ordered list of step definitions for this pipeline.
  pub(crate) steps: Vec<StepDef<T, Err>>,

  /// Retry policy applied to every single-step invocation.
  pub(crate) retry: RetryPolicy,
}

impl<T, Err> Pipeline<T, Err>
where
  T: Clone + Send + Sync + 'static,
  Err: std::error::Error + From<crate::error::CascadeError> + Send + Sync + 'static,
{
  /// Creates a new, empty `Pipeline` with the default retry policy.
  ///
  /// Running an empty pipeline is valid and yields
  /// [`PipelineOutcome::Empty`](crate::PipelineOutcome::Empty).
  pub fn new() -> Self {
    Self {
      steps: Vec::new(),
      retry: RetryPolicy::default(),
    }
  }

  /// Overrides the retry policy for every step of this pipeline.
  #[must_use]
  pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
    self.retry = policy;
    self
  }

  /// Ensures no step with the given name exists yet. Panics otherwise.
  /// Duplicate step names are a programming error (e.g. a copy-paste slip
  /// while assembling the pipeline), not a runtime `Err`.
  fn ensure_step_not_exists(&self, step_name: &str) {
    if self.steps.iter().any(|s| s.name == step_name) {
      panic!(
        "Cascade setup error: Step '{}' already exists in pipeline definition.",
        step_name
      );
    }
  }

  /// Installs the nullary source step producing the initial accumulator.
  ///
  /// The source must be the first step of the pipeline; calling this after
  /// any step has been added is a setup error and panics.
  ///
  /// `source_fn` may fail with any error convertible into the pipeline's
  /// `Err` type; failures are retried under the pipeline's retry policy.
  pub fn source<F, Fut, UserErr>(mut self, step_name: &str, source_fn: F) -> Self
  where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    if !self.steps.is_empty() {
      panic!(
        "Cascade setup error: Source step '{}' must be the first step of the pipeline.",
        step_name
      );
    }
    let boxed: SourceFn<T, Err> = Box::new(move || {
      let user_fut = source_fn();
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    self.steps.push(StepDef {
      name: step_name.to_string(),
      kind: StepKind::Source(boxed),
    });
    self
  }

  /// Appends a unary transform step consuming the previous step's output.
  ///
  /// Every invocation of `transform_fn` receives the value its predecessor
  /// produced; if an attempt fails and retries remain, the next attempt
  /// receives a clone of that *same* value (the pipeline never re-runs the
  /// predecessor to re-derive it).
  pub fn then<F, Fut, UserErr>(mut self, step_name: &str, transform_fn: F) -> Self
  where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, UserErr>> + Send + 'static,
    UserErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_step_not_exists(step_name);
    let boxed: TransformFn<T, Err> = Box::new(move |input| {
      let user_fut = transform_fn(input);
      Box::pin(async move { user_fut.await.map_err(Into::into) })
    });
    self.steps.push(StepDef {
      name: step_name.to_string(),
      kind: StepKind::Transform(boxed),
    });
    self
  }

  /// Number of steps in the pipeline.
  pub fn len(&self) -> usize {
    self.steps.len()
  }

  /// True if the pipeline contains no steps.
  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  /// The retry policy applied to each step of this pipeline.
  pub fn retry_policy(&self) -> &RetryPolicy {
    &self.retry
  }
}

impl<T, Err> Default for Pipeline<T, Err>
where
  T: Clone + Send + Sync + 'static,
  Err: std::error::Error + From<crate::error::CascadeError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<T, Err> std::fmt::Debug for Pipeline<T, Err>
where
  T: Clone + Send + Sync + 'static,
  Err: std::error::Error + From<crate::error::CascadeError> + Send + Sync + 'static,
{
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pipeline")
      .field("steps", &self.steps)
      .field("retry", &self.retry)
      .finish()
  }
}
