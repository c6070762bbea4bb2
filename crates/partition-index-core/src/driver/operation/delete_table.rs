use super::*;
use crate::schema::TableRef;

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTable {
    pub table: TableRef,
}

impl From<DeleteTable> for Operation {
    fn from(value: DeleteTable) -> Self {
        Self::DeleteTable(value)
    }
}
