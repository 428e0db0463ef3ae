// cascade/src/retry.rs

//! The retry executor: runs one asynchronous operation, retrying on failure
//! with a fixed delay, up to a configured retry budget.
//!
//! The executor is agnostic to what "failure" means for an operation: any
//! `Err` returned by the operation's future is considered retryable,
//! including logical failures intentionally signaled by a step. Once the
//! budget is exhausted, the last failure propagates to the caller unchanged.

use std::future::Future;
use std::time::Duration;
use tracing::{event, Level};

/// Number of additional attempts allowed after the first failed attempt.
pub const DEFAULT_RETRY_BUDGET: u32 = 3;

/// Fixed wait inserted between a failed attempt and the next retry.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_millis(2000);

/// Per-pipeline retry policy: a retry budget and a fixed inter-attempt delay.
///
/// The delay is constant; there is no backoff growth and no jitter. The
/// policy caps attempt count only, never total elapsed time: a step that
/// fails `budget` times occupies the pipeline for `budget * delay` plus its
/// own execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
  /// Retries permitted after the first failure. A budget of `n` allows
  /// `n + 1` total attempts.
  pub budget: u32,
  /// Fixed delay between a failed attempt and the next one.
  pub delay: Duration,
}

impl Default for RetryPolicy {
  fn default() -> Self {
    Self {
      budget: DEFAULT_RETRY_BUDGET,
      delay: DEFAULT_RETRY_DELAY,
    }
  }
}

impl RetryPolicy {
  /// Creates the default policy (budget 3, delay 2000ms).
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the retry budget.
  #[must_use]
  pub fn with_budget(mut self, budget: u32) -> Self {
    self.budget = budget;
    self
  }

  /// Sets the inter-attempt delay.
  #[must_use]
  pub fn with_delay(mut self, delay: Duration) -> Self {
    self.delay = delay;
    self
  }

  /// Executes `operation` under this policy.
  ///
  /// `operation` is invoked once; on failure, if retries remain, the
  /// executor sleeps for `self.delay` and invokes it again. The closure is
  /// responsible for re-presenting the *same* input on every invocation
  /// (the pipeline does this by cloning the accumulator it retained for the
  /// step). A failure on the last permitted attempt is returned unchanged,
  /// so the caller observes the root cause of the final attempt.
  ///
  /// Given an operation that fails exactly `k <= budget` times then
  /// succeeds, this performs exactly `k + 1` invocations and `k` delays.
  /// Given an operation that always fails, it performs `budget + 1`
  /// invocations and `budget` delays.
  pub async fn run<T, E, F, Fut>(&self, step_name: &str, mut operation: F) -> Result<T, E>
  where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
  {
    let mut remaining = self.budget;
    let mut attempt: u32 = 1;

    loop {
      match operation().await {
        Ok(value) => {
          if attempt > 1 {
            event!(
              Level::DEBUG,
              step_name,
              attempt,
              "Step succeeded after retries."
            );
          }
          return Ok(value);
        }
        Err(error) if remaining == 0 => {
          event!(
            Level::ERROR,
            step_name,
            attempt,
            error = %error,
            "Retry budget exhausted; failure is terminal."
          );
          return Err(error);
        }
        Err(error) => {
          event!(
            Level::WARN,
            step_name,
            attempt,
            remaining,
            delay_ms = self.delay.as_millis() as u64,
            error = %error,
            "Step attempt failed; retrying after delay."
          );
          remaining -= 1;
          attempt += 1;
          tokio::time::sleep(self.delay).await;
        }
      }
    }
  }
}
