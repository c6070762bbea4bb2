mod create_database;
pub use create_database::CreateDatabase;

mod create_partition_index;
pub use create_partition_index::CreatePartitionIndex;

mod create_table;
pub use create_table::CreateTable;

mod delete_database;
pub use delete_database::DeleteDatabase;

mod delete_partition_index;
pub use delete_partition_index::DeletePartitionIndex;

mod delete_table;
pub use delete_table::DeleteTable;

mod get_database;
pub use get_database::GetDatabase;

mod get_partition_indexes;
pub use get_partition_indexes::GetPartitionIndexes;

mod get_table;
pub use get_table::GetTable;

use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Create a database
    CreateDatabase(CreateDatabase),

    /// Create a partition index on an existing table
    CreatePartitionIndex(CreatePartitionIndex),

    /// Create a table inside an existing database
    CreateTable(CreateTable),

    /// Delete a database along with everything it contains
    DeleteDatabase(DeleteDatabase),

    /// Delete a single partition index
    DeletePartitionIndex(DeletePartitionIndex),

    /// Delete a table along with its partition indexes
    DeleteTable(DeleteTable),

    /// Describe a database
    GetDatabase(GetDatabase),

    /// List the partition indexes of a table
    GetPartitionIndexes(GetPartitionIndexes),

    /// Describe a table
    GetTable(GetTable),
}

impl Operation {
    /// The catalog API name of the operation, used for logging and fault
    /// injection.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateDatabase(_) => "CreateDatabase",
            Operation::CreatePartitionIndex(_) => "CreatePartitionIndex",
            Operation::CreateTable(_) => "CreateTable",
            Operation::DeleteDatabase(_) => "DeleteDatabase",
            Operation::DeletePartitionIndex(_) => "DeletePartitionIndex",
            Operation::DeleteTable(_) => "DeleteTable",
            Operation::GetDatabase(_) => "GetDatabase",
            Operation::GetPartitionIndexes(_) => "GetPartitionIndexes",
            Operation::GetTable(_) => "GetTable",
        }
    }
}
