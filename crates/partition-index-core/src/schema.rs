mod column;
pub use column::Column;

mod database;
pub use database::Database;

mod index_id;
pub use index_id::IndexId;

mod index_status;
pub use index_status::IndexStatus;

mod partition_index;
pub use partition_index::{PartitionIndex, PartitionIndexDescriptor};

mod partition_index_spec;
pub use partition_index_spec::PartitionIndexSpec;

mod remote_index_state;
pub use remote_index_state::RemoteIndexState;

mod table;
pub use table::{Table, TableRef};
