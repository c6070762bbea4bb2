use super::*;
use crate::schema::TableRef;

#[derive(Debug, Clone, PartialEq)]
pub struct GetTable {
    pub table: TableRef,
}

impl From<GetTable> for Operation {
    fn from(value: GetTable) -> Self {
        Self::GetTable(value)
    }
}
