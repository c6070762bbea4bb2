use partition_index::{driver::Driver, Config, RetryConfig};
use partition_index_acceptance_suite::Setup;
use partition_index_driver_memory::Memory;

use std::time::Duration;

/// Runs the acceptance suite against a fresh in-memory catalog.
pub struct MemorySetup {
    memory: Memory,
}

impl MemorySetup {
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
        }
    }
}

impl Default for MemorySetup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for MemorySetup {
    async fn driver(&self) -> partition_index::Result<Box<dyn Driver>> {
        Ok(Box::new(self.memory.clone()))
    }

    fn config(&self) -> Config {
        // The memory catalog settles on reads, not time, so there is nothing
        // to wait for between polls.
        Config::new()
            .create_timeout(Duration::from_secs(10))
            .delete_timeout(Duration::from_secs(10))
            .poll_interval(Duration::from_millis(5))
            .retry(RetryConfig {
                max_attempts: 4,
                initial_delay: Duration::from_millis(1),
                max_delay: Duration::from_millis(10),
                backoff_multiplier: 2.0,
                jitter: false,
            })
    }

    fn memory(&self) -> Option<&Memory> {
        Some(&self.memory)
    }
}
