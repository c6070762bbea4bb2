//! Bounded retries with exponential backoff and jitter.
//!
//! Every catalog call the manager makes goes through [`retry_with_backoff`].
//! Only errors reporting [`Error::is_retryable`] are retried; anything else,
//! including authorization and validation failures, is returned on the first
//! attempt. When the attempts run out the last transient error is surfaced as
//! a timeout.

use crate::{Error, Result};

use rand::Rng;
use std::{
    future::Future,
    time::{Duration, Instant},
};
use tracing::{error, warn};

/// Retry policy for individual catalog calls.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one. Values below 1
    /// behave as 1.
    pub max_attempts: u32,
    /// Initial delay between retries
    pub initial_delay: Duration,
    /// Maximum delay between retries
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
    /// Randomize each delay between 0.5x and 1.5x
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Create a config with a maximum number of attempts
    pub fn with_max_attempts(attempts: u32) -> Self {
        Self {
            max_attempts: attempts,
            ..Default::default()
        }
    }

    /// A policy that never retries
    pub fn none() -> Self {
        Self::with_max_attempts(1)
    }

    /// Delay before the retry following `delay`, capped at `max_delay`.
    ///
    /// Multipliers below 1 (or NaN) keep the delay constant.
    fn next_delay(&self, delay: Duration) -> Duration {
        let scaled = delay.as_secs_f64() * self.backoff_multiplier.max(1.0);
        Duration::try_from_secs_f64(scaled).map_or(self.max_delay, |next| next.min(self.max_delay))
    }
}

/// Execute an async catalog call, retrying transient failures.
///
/// `operation_name` is used for logging and for the timeout error reported
/// when attempts are exhausted.
pub(crate) async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    operation_name: &str,
    mut operation: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let started = Instant::now();
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0u32;
    let mut delay = config.initial_delay;

    loop {
        attempt += 1;

        let err = match operation().await {
            Ok(result) => return Ok(result),
            Err(err) if !err.is_retryable() => return Err(err),
            Err(err) => err,
        };

        if attempt >= max_attempts {
            error!(
                operation = %operation_name,
                attempt = attempt,
                error = %err,
                "catalog call failed after max retries"
            );
            return Err(err.context(Error::timeout(operation_name, started.elapsed())));
        }

        let sleep_for = if config.jitter {
            let jitter = rand::thread_rng().gen_range(0.5..1.5);
            Duration::try_from_secs_f64(delay.as_secs_f64() * jitter).unwrap_or(delay)
        } else {
            delay
        };

        warn!(
            operation = %operation_name,
            attempt = attempt,
            error = %err,
            delay_ms = sleep_for.as_millis(),
            "catalog call failed, retrying"
        );

        tokio::time::sleep(sleep_for).await;
        delay = config.next_delay(delay);
    }
}
