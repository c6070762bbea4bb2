use super::Column;

use serde::{Deserialize, Serialize};

/// Identifies a table within the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableRef {
    pub database: String,
    pub name: String,
}

impl TableRef {
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name: name.into(),
        }
    }
}

impl core::fmt::Display for TableRef {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}.{}", self.database, self.name)
    }
}

/// A catalog table. Only the parts partition indexes care about are modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub database: String,
    pub name: String,

    #[serde(default)]
    pub columns: Vec<Column>,

    /// Partition keys, in declaration order. Partition index keys must be
    /// drawn from these.
    #[serde(default)]
    pub partition_keys: Vec<Column>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_type: Option<String>,
}

impl Table {
    pub fn new(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            name: name.into(),
            columns: vec![],
            partition_keys: vec![],
            table_type: None,
        }
    }

    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn partition_key(mut self, column: Column) -> Self {
        self.partition_keys.push(column);
        self
    }

    pub fn table_ref(&self) -> TableRef {
        TableRef::new(&self.database, &self.name)
    }

    pub fn partition_key_names(&self) -> impl Iterator<Item = &str> {
        self.partition_keys.iter().map(|column| column.name.as_str())
    }

    pub fn has_partition_key(&self, name: &str) -> bool {
        self.partition_key_names().any(|key| key == name)
    }
}
