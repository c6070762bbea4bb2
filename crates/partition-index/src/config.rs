use crate::RetryConfig;

use std::time::Duration;

/// Settings for a [`Manager`](crate::Manager).
///
/// Built once at startup and handed to the manager explicitly.
#[derive(Debug, Clone)]
pub struct Config {
    /// How long `create` waits for a new index to leave `CREATING`
    pub create_timeout: Duration,

    /// How long `delete` waits for a deleted index to disappear
    pub delete_timeout: Duration,

    /// Delay between status reads while waiting on an index
    pub poll_interval: Duration,

    /// Retry policy applied to every individual catalog call
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            create_timeout: Duration::from_secs(10 * 60),
            delete_timeout: Duration::from_secs(10 * 60),
            poll_interval: Duration::from_secs(5),
            retry: RetryConfig::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_timeout(mut self, timeout: Duration) -> Self {
        self.create_timeout = timeout;
        self
    }

    pub fn delete_timeout(mut self, timeout: Duration) -> Self {
        self.delete_timeout = timeout;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
