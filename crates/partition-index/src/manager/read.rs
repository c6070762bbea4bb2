use super::Manager;
use crate::{driver::operation, Error, NotFoundCause, Result};
use partition_index_core::schema::{IndexId, RemoteIndexState};

impl Manager {
    /// Reads the current state of a partition index.
    ///
    /// An index whose table or database is gone is reported as not found,
    /// the same as an index that was deleted directly. Which entity was
    /// missing is available through [`Error::not_found_cause`].
    pub async fn read(&self, id: &IndexId) -> Result<RemoteIndexState> {
        let table = id.table();

        let res = self
            .exec(operation::GetPartitionIndexes {
                table: table.clone(),
            })
            .await;

        let indexes = match res {
            Ok(res) => res.into_partition_indexes()?,
            Err(err) => {
                let err = self.parent_error(&table, err, id.to_string()).await;
                if let Some(cause) = err.not_found_cause() {
                    tracing::debug!(index = %id, ?cause, "partition index parent missing");
                }
                return Err(err);
            }
        };

        let Some(descriptor) = indexes
            .into_iter()
            .find(|descriptor| descriptor.name == id.index_name)
        else {
            tracing::debug!(index = %id, "partition index missing");
            return Err(Error::not_found(NotFoundCause::Index, id.to_string()));
        };

        Ok(RemoteIndexState::from_descriptor(&table, descriptor))
    }
}
