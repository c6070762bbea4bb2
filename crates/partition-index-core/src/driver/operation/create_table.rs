use super::*;
use crate::schema::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// The table to create. Its `database` must already exist.
    pub table: Table,
}

impl From<CreateTable> for Operation {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
