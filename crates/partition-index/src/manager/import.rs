use super::Manager;
use crate::Result;
use partition_index_core::schema::{IndexId, PartitionIndexSpec, RemoteIndexState};

impl Manager {
    /// Brings an existing partition index under management.
    ///
    /// `id` has the form `database_name:table_name:index_name`. Returns the
    /// spec that describes the index as it exists, together with its state.
    pub async fn import(&self, id: &str) -> Result<(PartitionIndexSpec, RemoteIndexState)> {
        let id: IndexId = id.parse()?;
        let state = self.read(&id).await?;

        tracing::info!(index = %id, "partition index imported");
        Ok((state.to_spec(), state))
    }
}
