use super::*;
use crate::schema::TableRef;

/// Lists every partition index of a table, whatever its status.
///
/// Fails with a not-found error when the table or its database is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct GetPartitionIndexes {
    pub table: TableRef,
}

impl From<GetPartitionIndexes> for Operation {
    fn from(value: GetPartitionIndexes) -> Self {
        Self::GetPartitionIndexes(value)
    }
}
