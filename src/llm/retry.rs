//! Retry with exponential backoff around a fallible async operation

use log::warn;
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

/// Attempt bound and delay unit for [`retry_with_backoff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            unit: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Wait before the attempt following zero-based `attempt`: `(2^attempt + 1)` units.
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt).saturating_add(1);
        self.unit.saturating_mul(factor)
    }
}

#[derive(Debug)]
pub enum RetryError<E> {
    /// The operation failed with an error the predicate rejected.
    Fatal(E),
    /// Every attempt failed with a retryable error; `last` is the final one.
    Exhausted { attempts: u32, last: E },
}

/// Run `operation` up to `max_attempts` times.
///
/// A retryable failure with attempts remaining sleeps for `backoff(attempt)`
/// (zero-based) and tries again. A non-retryable failure returns immediately.
/// No sleep follows the final attempt.
pub async fn retry_with_backoff<T, E, F, Fut, B, P>(
    max_attempts: u32,
    backoff: B,
    is_retryable: P,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    B: Fn(u32) -> Duration,
    P: Fn(&E) -> bool,
    E: Display,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 0;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if !is_retryable(&e) => return Err(RetryError::Fatal(e)),
            Err(e) => {
                if attempt + 1 >= max_attempts {
                    return Err(RetryError::Exhausted {
                        attempts: attempt + 1,
                        last: e,
                    });
                }
                let delay = backoff(attempt);
                warn!(
                    "Attempt {}/{} failed ({}), retrying in {:?}",
                    attempt + 1,
                    max_attempts,
                    e,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
