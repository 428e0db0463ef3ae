// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use cascade::CascadeError;
use std::future::Future;
use std::pin::Pin;
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc, Mutex,
};
use tracing::Level;

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)] // Clone, PartialEq, Eq for assertions
pub enum TestError {
  #[error("Cascade framework error: {0}")] // Stored as String for Eq comparison
  Cascade(String),

  #[error("Test step failed: {0}")]
  Step(String),
}

impl From<CascadeError> for TestError {
  fn from(ce: CascadeError) -> Self {
    // Simple conversion for testing; stringifying keeps TestError Eq.
    TestError::Cascade(format!("{:?}", ce))
  }
}

/// The boxed future shape shared by the step factories below.
pub type BoxedStepFuture<T> = Pin<Box<dyn Future<Output = Result<T, TestError>> + Send>>;

// --- Common Step Factories ---

/// A nullary source producing `value`, counting its invocations.
pub fn counting_source(
  value: i64,
  calls: Arc<AtomicUsize>,
) -> impl Fn() -> BoxedStepFuture<i64> + Send + Sync + 'static {
  move || {
    calls.fetch_add(1, Ordering::SeqCst);
    let fut: BoxedStepFuture<i64> = Box::pin(async move { Ok(value) });
    fut
  }
}

/// A transform adding `delta` to its input, counting its invocations and
/// recording every input value it was handed.
pub fn counting_add(
  delta: i64,
  calls: Arc<AtomicUsize>,
  seen_inputs: Arc<Mutex<Vec<i64>>>,
) -> impl Fn(i64) -> BoxedStepFuture<i64> + Send + Sync + 'static {
  move |input: i64| {
    calls.fetch_add(1, Ordering::SeqCst);
    seen_inputs.lock().unwrap().push(input);
    let fut: BoxedStepFuture<i64> = Box::pin(async move { Ok(input + delta) });
    fut
  }
}

/// A transform that fails its first `failures` attempts with a transient
/// error, then echoes its input. Counts invocations and records every input
/// it observed, so tests can assert retry input stability.
pub fn flaky_echo(
  failures: usize,
  calls: Arc<AtomicUsize>,
  seen_inputs: Arc<Mutex<Vec<i64>>>,
) -> impl Fn(i64) -> BoxedStepFuture<i64> + Send + Sync + 'static {
  move |input: i64| {
    let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
    seen_inputs.lock().unwrap().push(input);
    let fut: BoxedStepFuture<i64> = Box::pin(async move {
      if attempt <= failures {
        Err(TestError::Step(format!(
          "transient failure on attempt {}",
          attempt
        )))
      } else {
        Ok(input)
      }
    });
    fut
  }
}

/// A source that fails its first `failures` attempts, then produces `value`.
pub fn flaky_source(
  failures: usize,
  value: i64,
  calls: Arc<AtomicUsize>,
) -> impl Fn() -> BoxedStepFuture<i64> + Send + Sync + 'static {
  move || {
    let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
    let fut: BoxedStepFuture<i64> = Box::pin(async move {
      if attempt <= failures {
        Err(TestError::Step(format!(
          "transient failure on attempt {}",
          attempt
        )))
      } else {
        Ok(value)
      }
    });
    fut
  }
}

/// A transform that fails on every attempt, counting invocations.
pub fn always_failing(
  calls: Arc<AtomicUsize>,
) -> impl Fn(i64) -> BoxedStepFuture<i64> + Send + Sync + 'static {
  move |_input: i64| {
    let attempt = calls.fetch_add(1, Ordering::SeqCst) + 1;
    let fut: BoxedStepFuture<i64> = Box::pin(async move {
      Err(TestError::Step(format!(
        "permanent failure on attempt {}",
        attempt
      )))
    });
    fut
  }
}

pub fn new_counter() -> Arc<AtomicUsize> {
  Arc::new(AtomicUsize::new(0))
}

pub fn new_input_log() -> Arc<Mutex<Vec<i64>>> {
  Arc::new(Mutex::new(Vec::new()))
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
