use super::TableRef;
use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three-part identity of a partition index.
///
/// The string form, `database_name:table_name:index_name`, is the identifier
/// accepted by import and produced when a managed index is recorded. Parsing
/// and formatting round-trip losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexId {
    pub database_name: String,
    pub table_name: String,
    pub index_name: String,
}

impl IndexId {
    const SEPARATOR: char = ':';

    pub fn new(
        database_name: impl Into<String>,
        table_name: impl Into<String>,
        index_name: impl Into<String>,
    ) -> Self {
        Self {
            database_name: database_name.into(),
            table_name: table_name.into(),
            index_name: index_name.into(),
        }
    }

    /// The table the index belongs to.
    pub fn table(&self) -> TableRef {
        TableRef::new(&self.database_name, &self.table_name)
    }
}

impl FromStr for IndexId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts = s.split(Self::SEPARATOR).collect::<Vec<_>>();

        let [database_name, table_name, index_name] = parts[..] else {
            return Err(Error::invalid_import_id(s));
        };

        if parts.iter().any(|part| part.is_empty()) {
            return Err(Error::invalid_import_id(s));
        }

        Ok(IndexId::new(database_name, table_name, index_name))
    }
}

impl core::fmt::Display for IndexId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.database_name,
            self.table_name,
            self.index_name,
            sep = Self::SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_segments() {
        let id: IndexId = "db1:tbl1:idx1".parse().unwrap();
        assert_eq!(id, IndexId::new("db1", "tbl1", "idx1"));
        assert_eq!(id.table(), TableRef::new("db1", "tbl1"));
    }

    #[test]
    fn display_round_trips() {
        let raw = "tf-acc-test-123:tf-acc-test-123:tf-acc-test-123";
        let id: IndexId = raw.parse().unwrap();
        assert_eq!(id.to_string(), raw);
    }

    #[test]
    fn wrong_segment_count_is_rejected() {
        for raw in ["", "db1", "db1:tbl1", "db1:tbl1:idx1:extra", "123456789012:db1:tbl1:idx1"] {
            let err = raw.parse::<IndexId>().unwrap_err();
            assert!(err.is_invalid_import_id(), "raw={raw:?} err={err}");
        }
    }

    #[test]
    fn empty_segment_is_rejected() {
        for raw in [":tbl1:idx1", "db1::idx1", "db1:tbl1:", "::"] {
            let err = raw.parse::<IndexId>().unwrap_err();
            assert!(err.is_invalid_import_id(), "raw={raw:?} err={err}");
        }
    }

    #[test]
    fn error_names_the_expected_format() {
        let err = "db1/tbl1/idx1".parse::<IndexId>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid import id `db1/tbl1/idx1`; expected DATABASE_NAME:TABLE_NAME:INDEX_NAME"
        );
    }
}
