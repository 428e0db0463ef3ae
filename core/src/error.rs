// cascade_core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CascadeError {
  #[error("Pipeline has no source: first step '{step_name}' is a transform")]
  SourceMissing { step_name: String },

  #[error("Error in user-provided step. Source: {source}")]
  StepFailure {
    #[source]
    source: AnyhowError,
  },

  #[error("Internal cascade error: {0}")]
  Internal(String),
}

// This is the key conversion Cascade provides for external errors: a step
// that fails with an arbitrary anyhow::Error surfaces as StepFailure, with
// the full source chain preserved so callers can distinguish causes.
impl From<AnyhowError> for CascadeError {
  fn from(err: AnyhowError) -> Self {
    CascadeError::StepFailure { source: err }
  }
}

pub type CascadeResult<T, E = CascadeError> = std::result::Result<T, E>;
