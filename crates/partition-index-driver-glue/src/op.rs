mod create_database;
mod create_partition_index;
mod create_table;
mod delete_database;
mod delete_partition_index;
mod delete_table;
mod get_database;
mod get_partition_indexes;
mod get_table;

use super::{
    column_from_glue, descriptor_from_glue, glue_column, DatabaseInput, Glue, GluePartitionIndex,
    SdkErrorExt, StorageDescriptor, TableInput,
};
use partition_index_core::{
    driver::{operation, Response},
    schema, Error, NotFoundCause, Result,
};
