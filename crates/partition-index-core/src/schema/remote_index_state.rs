use super::{IndexId, IndexStatus, PartitionIndexDescriptor, PartitionIndexSpec, TableRef};

use serde::{Deserialize, Serialize};

/// A partition index as last observed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteIndexState {
    pub database_name: String,
    pub table_name: String,
    pub index_name: String,
    pub keys: Vec<String>,
    pub status: IndexStatus,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backfill_errors: Vec<String>,
}

impl RemoteIndexState {
    pub fn from_descriptor(table: &TableRef, descriptor: PartitionIndexDescriptor) -> Self {
        Self {
            database_name: table.database.clone(),
            table_name: table.name.clone(),
            index_name: descriptor.name,
            keys: descriptor.keys,
            status: descriptor.status,
            backfill_errors: descriptor.backfill_errors,
        }
    }

    pub fn id(&self) -> IndexId {
        IndexId::new(&self.database_name, &self.table_name, &self.index_name)
    }

    /// The definition that would produce this index.
    pub fn to_spec(&self) -> PartitionIndexSpec {
        PartitionIndexSpec::new(
            &self.database_name,
            &self.table_name,
            &self.index_name,
            self.keys.iter().cloned(),
        )
    }
}
