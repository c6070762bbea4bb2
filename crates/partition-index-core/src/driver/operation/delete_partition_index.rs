use super::*;
use crate::schema::TableRef;

#[derive(Debug, Clone, PartialEq)]
pub struct DeletePartitionIndex {
    /// Which table the index belongs to
    pub table: TableRef,

    pub index_name: String,
}

impl From<DeletePartitionIndex> for Operation {
    fn from(value: DeletePartitionIndex) -> Self {
        Self::DeletePartitionIndex(value)
    }
}
