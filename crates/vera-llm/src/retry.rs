//! Bounded retry with exponential backoff.
//!
//! Retryable failures (see [`LlmError::is_retryable`]) are retried up to
//! `max_attempts` total attempts. The delay before retry `n` is
//! `base_delay * 2^(n-1)`, capped at `max_delay`. The last error is returned
//! once the attempts are used up.

use std::future::Future;
use std::time::Duration;

use vera_config::RetryConfig;

use crate::error::LlmError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub base_delay: Duration,
    /// Backoff is capped here.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_millis(config.base_delay_ms),
            max_delay: Duration::from_millis(config.max_delay_ms),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after failed attempt number `attempt` (1-based).
    #[must_use]
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 1_u32
            .checked_shl(attempt.saturating_sub(1))
            .unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }

    /// Full delay schedule under sustained failure.
    #[must_use]
    pub fn delays(&self) -> Vec<Duration> {
        (1..self.max_attempts).map(|n| self.delay_for(n)).collect()
    }
}

/// Run `op` until it succeeds, fails terminally, or the attempts run out.
///
/// `op` receives the 1-based attempt number.
///
/// # Errors
///
/// Returns the first non-retryable error, or the last retryable one once
/// `policy.max_attempts` attempts have failed.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, LlmError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, LlmError>>,
{
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_retryable() && attempt < policy.max_attempts => {
                let delay = policy.delay_for(attempt);
                tracing::warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    %error,
                    "chat request failed, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => {
                if error.is_retryable() {
                    tracing::warn!(attempts = attempt, %error, "chat request failed, giving up");
                }
                return Err(error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn api_error() -> LlmError {
        LlmError::Api {
            status: 500,
            message: String::new(),
        }
    }

    #[test]
    fn default_schedule_is_one_then_two_seconds() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(
            policy.delays(),
            vec![Duration::from_millis(1000), Duration::from_millis(2000)]
        );
    }

    #[test]
    fn delays_double_until_capped() {
        let policy = RetryPolicy {
            max_attempts: 6,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(5000),
        };
        assert_eq!(
            policy.delays(),
            [1000, 2000, 4000, 5000, 5000]
                .into_iter()
                .map(Duration::from_millis)
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn huge_attempt_numbers_saturate() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(200), policy.max_delay);
    }

    #[test]
    fn single_attempt_has_no_delays() {
        let policy = RetryPolicy {
            max_attempts: 1,
            ..RetryPolicy::default()
        };
        assert!(policy.delays().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn succeeds_after_transient_failures() {
        let calls = Cell::new(0_u32);
        let result = with_retry(&RetryPolicy::default(), |attempt| {
            calls.set(calls.get() + 1);
            async move {
                if attempt < 3 {
                    Err(api_error())
                } else {
                    Ok(attempt)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn sustained_failure_stops_at_max_attempts() {
        let calls = Cell::new(0_u32);
        let started = tokio::time::Instant::now();
        let result: Result<(), _> = with_retry(&RetryPolicy::default(), |_| {
            calls.set(calls.get() + 1);
            async { Err(LlmError::RateLimited { retry_after_secs: 60 }) }
        })
        .await;
        assert!(matches!(result, Err(LlmError::RateLimited { .. })));
        assert_eq!(calls.get(), 3);
        assert_eq!(started.elapsed(), Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_errors_are_not_retried() {
        let calls = Cell::new(0_u32);
        let result: Result<(), _> = with_retry(&RetryPolicy::default(), |_| {
            calls.set(calls.get() + 1);
            async { Err(LlmError::Parse("nope".into())) }
        })
        .await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
        assert_eq!(calls.get(), 1);
    }
}
