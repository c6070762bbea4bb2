use super::IndexStatus;

/// A partition index definition as submitted to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionIndex {
    pub name: String,

    /// Partition key names, in index order
    pub keys: Vec<String>,
}

/// A partition index as described by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionIndexDescriptor {
    pub name: String,
    pub keys: Vec<String>,
    pub status: IndexStatus,

    /// Reasons the catalog gave for failing to backfill the index
    pub backfill_errors: Vec<String>,
}

impl PartitionIndexDescriptor {
    pub fn new(name: impl Into<String>, keys: Vec<String>, status: IndexStatus) -> Self {
        Self {
            name: name.into(),
            keys,
            status,
            backfill_errors: vec![],
        }
    }
}
