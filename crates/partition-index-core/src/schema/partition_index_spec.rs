use super::{IndexId, PartitionIndex, TableRef};
use crate::{error::ValidationErrorKind, Error, Result};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The desired state of a partition index, as declared by configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionIndexSpec {
    pub database_name: String,
    pub table_name: String,
    pub index_name: String,

    /// Partition key columns, in index order
    pub keys: Vec<String>,
}

impl PartitionIndexSpec {
    pub fn new<K: Into<String>>(
        database_name: impl Into<String>,
        table_name: impl Into<String>,
        index_name: impl Into<String>,
        keys: impl IntoIterator<Item = K>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            table_name: table_name.into(),
            index_name: index_name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> IndexId {
        IndexId::new(&self.database_name, &self.table_name, &self.index_name)
    }

    pub fn table(&self) -> TableRef {
        TableRef::new(&self.database_name, &self.table_name)
    }

    /// The definition submitted to the catalog.
    pub fn partition_index(&self) -> PartitionIndex {
        PartitionIndex {
            name: self.index_name.clone(),
            keys: self.keys.clone(),
        }
    }

    /// Checks the parts of the definition that do not depend on the catalog.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("database_name", &self.database_name),
            ("table_name", &self.table_name),
            ("index_name", &self.index_name),
        ] {
            if value.is_empty() {
                return Err(Error::validation(ValidationErrorKind::EmptyName { field }));
            }
        }

        if self.keys.is_empty() {
            return Err(Error::validation(ValidationErrorKind::EmptyKeys));
        }

        let mut seen = HashSet::new();
        for key in &self.keys {
            if key.is_empty() {
                return Err(Error::validation(ValidationErrorKind::EmptyName { field: "keys" }));
            }

            if !seen.insert(key.as_str()) {
                return Err(Error::validation(ValidationErrorKind::DuplicateKey {
                    key: key.clone(),
                }));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_spec() {
        let spec = PartitionIndexSpec::new("d", "t", "idx", ["c1", "c2"]);
        assert!(spec.validate().is_ok());
        assert_eq!(spec.id().to_string(), "d:t:idx");
    }

    #[test]
    fn empty_keys() {
        let spec = PartitionIndexSpec::new("d", "t", "idx", Vec::<String>::new());
        let err = spec.validate().unwrap_err();
        assert_eq!(err.validation_kind(), Some(&ValidationErrorKind::EmptyKeys));
    }

    #[test]
    fn duplicate_keys() {
        let spec = PartitionIndexSpec::new("d", "t", "idx", ["c1", "c2", "c1"]);
        let err = spec.validate().unwrap_err();
        assert_eq!(
            err.validation_kind(),
            Some(&ValidationErrorKind::DuplicateKey { key: "c1".into() })
        );
    }

    #[test]
    fn empty_index_name() {
        let spec = PartitionIndexSpec::new("d", "t", "", ["c1"]);
        let err = spec.validate().unwrap_err();
        assert_eq!(err.to_string(), "`index_name` must not be empty");
    }

    #[test]
    fn deserialize_from_declarative_input() {
        let spec: PartitionIndexSpec = serde_json::from_str(
            r#"{
                "database_name": "d",
                "table_name": "t",
                "index_name": "idx",
                "keys": ["my_column_1", "my_column_2"]
            }"#,
        )
        .unwrap();

        assert_eq!(
            spec,
            PartitionIndexSpec::new("d", "t", "idx", ["my_column_1", "my_column_2"])
        );
    }
}
