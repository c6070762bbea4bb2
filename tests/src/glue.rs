use partition_index::{driver::Driver, Config};
use partition_index_acceptance_suite::Setup;

use std::time::Duration;

/// Runs the acceptance suite against AWS Glue, or a Glue-compatible endpoint.
///
/// The catalog is selected by `PARTITION_INDEX_TEST_GLUE_URL`, which defaults
/// to `glue://` (the account and region of the ambient AWS configuration).
/// Scenarios that rely on fault injection are skipped.
pub struct GlueSetup;

#[async_trait::async_trait]
impl Setup for GlueSetup {
    async fn driver(&self) -> partition_index::Result<Box<dyn Driver>> {
        let url = std::env::var("PARTITION_INDEX_TEST_GLUE_URL")
            .unwrap_or_else(|_| "glue://".to_string());

        partition_index::driver::connect(&url).await
    }

    fn config(&self) -> Config {
        Config::new().poll_interval(Duration::from_secs(2))
    }
}
