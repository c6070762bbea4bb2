use super::Manager;
use crate::{driver::operation, retry::retry_with_backoff, Error, Result, ValidationErrorKind};
use partition_index_core::schema::{
    IndexId, IndexStatus, PartitionIndexSpec, RemoteIndexState, Table,
};

use std::{
    future::Future,
    sync::atomic::{AtomicBool, Ordering},
    time::Instant,
};
use tracing::{debug, info, warn};

impl Manager {
    /// Creates a partition index and waits until the catalog reports it
    /// `ACTIVE`.
    ///
    /// The whole operation, submission and waiting, is bounded by
    /// [`Config::create_timeout`](crate::Config::create_timeout).
    pub async fn create(&self, spec: &PartitionIndexSpec) -> Result<RemoteIndexState> {
        let id = spec.id();
        let started = Instant::now();

        match tokio::time::timeout(self.config.create_timeout, self.create_inner(spec, &id)).await
        {
            Ok(res) => res,
            Err(_) => {
                warn!(index = %id, "timed out waiting for partition index to become active");
                Err(Error::timeout(
                    format!("creating partition index {id}"),
                    started.elapsed(),
                ))
            }
        }
    }

    /// Like [`create`](Self::create), but gives up as soon as `cancel`
    /// completes.
    ///
    /// A cancelled create leaves the catalog as it was at that point: an
    /// index that was already submitted keeps being built.
    pub async fn create_with_cancel(
        &self,
        spec: &PartitionIndexSpec,
        cancel: impl Future<Output = ()>,
    ) -> Result<RemoteIndexState> {
        tokio::select! {
            res = self.create(spec) => res,
            _ = cancel => {
                let id = spec.id();
                info!(index = %id, "partition index creation cancelled");
                Err(Error::cancelled(format!("creating partition index {id}")))
            }
        }
    }

    async fn create_inner(
        &self,
        spec: &PartitionIndexSpec,
        id: &IndexId,
    ) -> Result<RemoteIndexState> {
        spec.validate()?;

        let table = self.parent_table(spec, id).await?;
        check_keys(spec, &table)?;

        self.submit(spec, id).await?;
        info!(index = %id, keys = ?spec.keys, "partition index submitted");

        self.wait_until_active(id).await
    }

    async fn parent_table(&self, spec: &PartitionIndexSpec, id: &IndexId) -> Result<Table> {
        let table = spec.table();

        match self.exec(operation::GetTable { table: table.clone() }).await {
            Ok(res) => res.into_table(),
            Err(err) => Err(self.parent_error(&table, err, id.to_string()).await),
        }
    }

    async fn submit(&self, spec: &PartitionIndexSpec, id: &IndexId) -> Result<()> {
        let op = operation::CreatePartitionIndex {
            table: spec.table(),
            index: spec.partition_index(),
        };

        let driver = &self.driver;
        let unacknowledged = AtomicBool::new(false);

        let res = retry_with_backoff(&self.config.retry, "CreatePartitionIndex", || {
            let op = op.clone();
            let unacknowledged = &unacknowledged;
            async move {
                let res = driver.exec(op.into()).await;
                if matches!(&res, Err(err) if err.is_outcome_unknown()) {
                    unacknowledged.store(true, Ordering::Relaxed);
                }
                res
            }
        })
        .await;

        let err = match res {
            Ok(_) => return Ok(()),
            Err(err) => err,
        };

        if err.is_not_found() {
            return Err(self.parent_error(&op.table, err, id.to_string()).await);
        }

        // An earlier attempt whose response was lost may have created the
        // index. It is ours if it carries exactly our keys. A definitive
        // rejection never applied, so the index then belongs to someone else.
        if err.is_already_exists() && unacknowledged.load(Ordering::Relaxed) {
            if let Ok(existing) = self.read(id).await {
                if existing.keys == spec.keys && existing.status != IndexStatus::Deleting {
                    debug!(index = %id, "adopting index created by an unacknowledged attempt");
                    return Ok(());
                }
            }
        }

        Err(err)
    }

    async fn wait_until_active(&self, id: &IndexId) -> Result<RemoteIndexState> {
        loop {
            let state = self.read(id).await?;

            match state.status {
                IndexStatus::Active => {
                    info!(index = %id, "partition index active");
                    return Ok(state);
                }
                IndexStatus::Failed => {
                    warn!(
                        index = %id,
                        backfill_errors = ?state.backfill_errors,
                        "partition index failed"
                    );
                    return Err(Error::index_failed(id.to_string(), state.backfill_errors));
                }
                status => {
                    debug!(index = %id, %status, "waiting for partition index");
                    tokio::time::sleep(self.config.poll_interval).await;
                }
            }
        }
    }
}

fn check_keys(spec: &PartitionIndexSpec, table: &Table) -> Result<()> {
    match spec.keys.iter().find(|key| !table.has_partition_key(key)) {
        Some(key) => Err(Error::validation(ValidationErrorKind::UnknownPartitionKey {
            key: key.clone(),
            table: table.table_ref().to_string(),
            partition_keys: table.partition_key_names().map(str::to_string).collect(),
        })),
        None => Ok(()),
    }
}
