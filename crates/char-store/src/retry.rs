//! Retry with capped exponential backoff for transient store failures.
//!
//! Transient means: 429 with a short `Retry-After`, any 5xx, and transport
//! timeouts or connection failures. Everything else (4xx, decode errors) is
//! returned on the first attempt.

use std::future::Future;
use std::time::Duration;

use char_config::StoreConfig;

use crate::error::StoreError;

/// Longest `Retry-After` worth waiting for inside a single command.
const MAX_RATE_LIMIT_WAIT: Duration = Duration::from_secs(10);

/// Configuration for retry behavior on transient store errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(2),
        }
    }
}

impl RetryConfig {
    #[must_use]
    pub fn from_store(config: &StoreConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay: Duration::from_millis(config.base_delay_ms),
            ..Self::default()
        }
    }

    /// Delay before attempt `attempt + 1`, or `None` if `err` should not be
    /// retried. `attempt` is 1-based.
    #[must_use]
    pub fn delay_after(&self, attempt: u32, err: &StoreError) -> Option<Duration> {
        if attempt >= self.max_attempts || !is_transient(err) {
            return None;
        }
        let backoff = self
            .base_delay
            .saturating_mul(2u32.saturating_pow(attempt - 1))
            .min(self.max_delay);
        match err {
            StoreError::RateLimited { retry_after_secs } => {
                let wait = Duration::from_secs(*retry_after_secs);
                (wait <= MAX_RATE_LIMIT_WAIT).then(|| wait.max(backoff))
            }
            _ => Some(backoff),
        }
    }
}

/// Whether a store error is worth retrying.
#[must_use]
pub fn is_transient(err: &StoreError) -> bool {
    match err {
        StoreError::RateLimited { .. } => true,
        StoreError::Api { status, .. } => *status >= 500,
        StoreError::Http(e) => e.is_timeout() || e.is_connect(),
        _ => false,
    }
}

/// Run `op` until it succeeds, fails permanently, or attempts run out.
///
/// `what` names the request in log events.
pub async fn with_backoff<T, F, Fut>(
    config: &RetryConfig,
    what: &str,
    mut op: F,
) -> Result<T, StoreError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, StoreError>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) => match config.delay_after(attempt, &e) {
                Some(delay) => {
                    tracing::warn!(
                        what,
                        attempt,
                        max_attempts = config.max_attempts,
                        ?delay,
                        %e,
                        "store request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                None => return Err(e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    fn api(status: u16) -> StoreError {
        StoreError::Api {
            status,
            message: String::new(),
        }
    }

    fn fast() -> RetryConfig {
        RetryConfig {
            max_attempts: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(4),
        }
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let config = RetryConfig {
            max_attempts: 6,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(300),
        };
        let delays = (1..6)
            .map(|attempt| config.delay_after(attempt, &api(503)))
            .collect::<Vec<_>>();
        assert_eq!(
            delays,
            [100, 200, 300, 300, 300]
                .map(|ms| Some(Duration::from_millis(ms)))
                .to_vec()
        );
        assert_eq!(config.delay_after(6, &api(503)), None);
    }

    #[test]
    fn client_errors_are_not_retried() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_after(1, &api(404)), None);
        assert_eq!(config.delay_after(1, &StoreError::Parse("bad".into())), None);
    }

    #[test]
    fn rate_limit_waits_for_retry_after() {
        let config = RetryConfig::default();
        let short = StoreError::RateLimited {
            retry_after_secs: 2,
        };
        assert_eq!(config.delay_after(1, &short), Some(Duration::from_secs(2)));

        let long = StoreError::RateLimited {
            retry_after_secs: 60,
        };
        assert_eq!(config.delay_after(1, &long), None);
    }

    #[test]
    fn from_store_reads_config() {
        let store = StoreConfig {
            max_attempts: 5,
            base_delay_ms: 50,
            ..Default::default()
        };
        let config = RetryConfig::from_store(&store);
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.base_delay, Duration::from_millis(50));
    }

    #[tokio::test]
    async fn retries_transient_until_success() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result = with_backoff(&fast(), "test", move || async move {
            if calls.fetch_add(1, Ordering::SeqCst) < 2 {
                Err(api(502))
            } else {
                Ok("done")
            }
        })
        .await;
        assert_eq!(result.unwrap(), "done");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_attempts() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<(), _> = with_backoff(&fast(), "test", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(api(500))
        })
        .await;
        assert!(matches!(result, Err(StoreError::Api { status: 500, .. })));
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn permanent_error_fails_fast() {
        let counter = AtomicU32::new(0);
        let calls = &counter;
        let result: Result<(), _> = with_backoff(&fast(), "test", move || async move {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(api(400))
        })
        .await;
        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
