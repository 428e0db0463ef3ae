// src/lib.rs

//! Cascade: an ASYNC waterfall pipeline executor for Rust.
//!
//! Cascade runs an ordered sequence of asynchronous steps where each step's
//! output feeds the next step's input, with features like:
//!  - A nullary source step producing the initial value, followed by unary
//!    transform steps threading an accumulator through the chain.
//!  - A bounded, fixed-delay retry policy applied to every step invocation;
//!    a retried attempt always receives the same input as the first attempt.
//!  - Strict sequential ordering: a step never starts before its predecessor
//!    has fully succeeded, retries included.
//!  - Short-circuit failure: once a step exhausts its retry budget, the run
//!    aborts and the step's last error surfaces to the caller unchanged.
//!  - An explicit `Empty` outcome for the degenerate empty pipeline.

// Declare modules according to the planned structure
pub mod core;
pub mod error;
pub mod pipeline;
pub mod retry;

// --- Re-exports for the Public API ---

// Core types that users will interact with frequently
pub use crate::core::control::PipelineOutcome;
pub use crate::core::step::{SourceFn, StepDef, StepKind, TransformFn};

// The main Pipeline struct
pub use crate::pipeline::definition::Pipeline;

// The retry policy and its default constants
pub use crate::retry::{RetryPolicy, DEFAULT_RETRY_BUDGET, DEFAULT_RETRY_DELAY};

pub use crate::error::{CascadeError, CascadeResult};

/*
    Core Workflow:
    1. Pick an accumulator type `T` for your pipeline (it must be `Clone`, so
       a failed step attempt can be retried with the same input).
    2. Build a `Pipeline<T, Err>`: `.source("fetch", || async { ... })`
       followed by `.then("parse", |v| async move { ... })` and so on.
    3. Optionally override the retry policy with `.with_retry_policy(...)`.
    4. Call `pipeline.run().await`. On success you get
       `PipelineOutcome::Completed(final_value)` (or `::Empty` for a pipeline
       with no steps); on terminal failure you get the failing step's last
       error, unmodified.
*/
