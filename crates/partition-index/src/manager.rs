mod apply;
pub use apply::Applied;

mod create;

mod delete;

mod drift;
pub use drift::Drift;

mod import;

mod read;

use crate::{
    driver::{self, operation, Driver, Operation, Response},
    retry::retry_with_backoff,
    Config, Error, NotFoundCause, Result,
};
use partition_index_core::schema::TableRef;

use std::sync::Arc;

/// Manages the lifecycle of partition indexes in a data catalog.
///
/// The manager holds no mutable state: every operation reads the catalog
/// afresh, and clones share the same driver.
#[derive(Debug, Clone)]
pub struct Manager {
    driver: Arc<dyn Driver>,
    config: Config,
}

/// Builds a [`Manager`] from a [`Config`] and a driver or connection URL.
#[derive(Debug, Default)]
pub struct Builder {
    config: Config,
}

impl Builder {
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Manager> {
        let driver = driver::connect(url).await?;
        Ok(self.build(driver))
    }

    pub fn build(&mut self, driver: impl Driver) -> Manager {
        Manager::new(driver, self.config.clone())
    }
}

impl Manager {
    pub fn new(driver: impl Driver, config: Config) -> Self {
        Self {
            driver: Arc::new(driver),
            config,
        }
    }

    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The underlying catalog driver.
    pub fn driver(&self) -> &Arc<dyn Driver> {
        &self.driver
    }

    /// Execute a single catalog call under the retry policy.
    pub async fn exec(&self, op: impl Into<Operation>) -> Result<Response> {
        let op = op.into();
        let driver = &self.driver;

        retry_with_backoff(&self.config.retry, op.name(), || {
            let op = op.clone();
            async move { driver.exec(op).await }
        })
        .await
    }

    /// Works out which parent of a partition index is missing after the
    /// catalog reported one of them as not found.
    ///
    /// Only informs logs and [`Error::not_found_cause`]; callers see a single
    /// not-found condition either way.
    async fn missing_parent(
        &self,
        table: &TableRef,
        reported: Option<NotFoundCause>,
    ) -> NotFoundCause {
        if reported == Some(NotFoundCause::Database) {
            return NotFoundCause::Database;
        }

        let probe = self
            .exec(operation::GetDatabase {
                name: table.database.clone(),
            })
            .await;

        match probe {
            Ok(_) => NotFoundCause::Table,
            Err(err) if err.is_not_found() => NotFoundCause::Database,
            Err(err) => {
                tracing::debug!(table = %table, error = %err, "could not tell which parent is missing");
                match reported {
                    Some(NotFoundCause::Unknown) | None => NotFoundCause::Table,
                    Some(cause) => cause,
                }
            }
        }
    }

    /// Maps a not-found error from a table-scoped call onto the missing
    /// parent; any other error is returned as is.
    async fn parent_error(&self, table: &TableRef, err: Error, context: String) -> Error {
        if !err.is_not_found() {
            return err;
        }

        let cause = self.missing_parent(table, err.not_found_cause()).await;
        Error::not_found(cause, context)
    }
}
