pub mod control;
pub mod step;

// Re-export key types for easier access from other Cascade modules (and lib.rs)
pub use control::PipelineOutcome;
pub use step::{SourceFn, StepDef, StepKind, TransformFn};
