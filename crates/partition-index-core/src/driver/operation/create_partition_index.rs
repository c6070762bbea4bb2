use super::*;
use crate::schema::{PartitionIndex, TableRef};

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePartitionIndex {
    /// Which table to index
    pub table: TableRef,

    pub index: PartitionIndex,
}

impl From<CreatePartitionIndex> for Operation {
    fn from(value: CreatePartitionIndex) -> Self {
        Self::CreatePartitionIndex(value)
    }
}
