use super::Manager;
use crate::{driver::operation, Error, Result};
use partition_index_core::schema::IndexId;

use std::time::Instant;
use tracing::{debug, info};

impl Manager {
    /// Deletes a partition index and waits until it no longer reads back.
    ///
    /// Deleting an index that is already gone, directly or through its table
    /// or database, succeeds.
    pub async fn delete(&self, id: &IndexId) -> Result<()> {
        let res = self
            .exec(operation::DeletePartitionIndex {
                table: id.table(),
                index_name: id.index_name.clone(),
            })
            .await;

        match res {
            Ok(_) => info!(index = %id, "partition index delete submitted"),
            Err(err) if err.is_not_found() => {
                debug!(index = %id, cause = ?err.not_found_cause(), "partition index already gone");
                return Ok(());
            }
            Err(err) => return Err(err),
        }

        let started = Instant::now();

        match tokio::time::timeout(self.config.delete_timeout, self.wait_until_gone(id)).await {
            Ok(res) => res,
            Err(_) => Err(Error::timeout(
                format!("deleting partition index {id}"),
                started.elapsed(),
            )),
        }
    }

    async fn wait_until_gone(&self, id: &IndexId) -> Result<()> {
        loop {
            match self.read(id).await {
                Ok(state) => {
                    debug!(
                        index = %id,
                        status = %state.status,
                        "waiting for partition index to go away"
                    );
                    tokio::time::sleep(self.config.poll_interval).await;
                }
                Err(err) if err.is_not_found() => {
                    info!(index = %id, "partition index deleted");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }
}
