use partition_index::schema::{
    Column, Database, IndexId, PartitionIndexSpec, Table, TableRef,
};

/// The catalog objects a scenario starts from.
///
/// The database, the table and the index all carry the test's isolated name.
/// The table is partitioned by `my_column_1` (int) and `my_column_2`
/// (string), and the index covers both, in that order.
#[derive(Debug, Clone)]
pub struct Fixture {
    pub database: Database,
    pub table: Table,
    pub spec: PartitionIndexSpec,
}

impl Fixture {
    pub const KEYS: [&'static str; 2] = ["my_column_1", "my_column_2"];

    pub fn new(name: &str) -> Self {
        let table = Table::new(name, name)
            .column(Column::new("my_column_3", "string"))
            .partition_key(Column::new(Self::KEYS[0], "int").comment("my_column1_comment"))
            .partition_key(Column::new(Self::KEYS[1], "string").comment("my_column2_comment"));

        Self {
            database: Database::new(name),
            spec: PartitionIndexSpec::new(name, name, name, Self::KEYS),
            table,
        }
    }

    pub fn id(&self) -> IndexId {
        self.spec.id()
    }

    pub fn table_ref(&self) -> TableRef {
        self.table.table_ref()
    }

    /// The fixture spec with different keys.
    pub fn spec_with_keys(&self, keys: &[&str]) -> PartitionIndexSpec {
        PartitionIndexSpec {
            keys: keys.iter().map(|key| key.to_string()).collect(),
            ..self.spec.clone()
        }
    }
}
