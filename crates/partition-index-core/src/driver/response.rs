use crate::{
    schema::{Database, PartitionIndexDescriptor, Table},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// The operation succeeded and returns nothing
    Ack,

    Database(Database),

    Table(Table),

    /// Every partition index defined on a table
    PartitionIndexes(Vec<PartitionIndexDescriptor>),
}

impl Response {
    pub fn into_table(self) -> Result<Table> {
        match self {
            Response::Table(table) => Ok(table),
            other => Err(Error::invalid_result(format!(
                "expected Table, got {}",
                other.variant_name()
            ))),
        }
    }

    pub fn into_partition_indexes(self) -> Result<Vec<PartitionIndexDescriptor>> {
        match self {
            Response::PartitionIndexes(indexes) => Ok(indexes),
            other => Err(Error::invalid_result(format!(
                "expected PartitionIndexes, got {}",
                other.variant_name()
            ))),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Response::Ack => "Ack",
            Response::Database(_) => "Database",
            Response::Table(_) => "Table",
            Response::PartitionIndexes(_) => "PartitionIndexes",
        }
    }
}
