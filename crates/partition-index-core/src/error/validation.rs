use super::{Error, ErrorKind};

/// Error when a partition index definition is rejected before it is submitted.
#[derive(Debug)]
pub(super) struct ValidationError {
    kind: ValidationErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required name was left empty
    EmptyName { field: &'static str },

    /// The index has no keys
    EmptyKeys,

    /// A key appears more than once
    DuplicateKey { key: String },

    /// A key is not one of the table's partition keys
    UnknownPartitionKey {
        key: String,
        table: String,
        partition_keys: Vec<String>,
    },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::EmptyName { field } => write!(f, "`{field}` must not be empty"),
            ValidationErrorKind::EmptyKeys => {
                f.write_str("partition index must have at least one key")
            }
            ValidationErrorKind::DuplicateKey { key } => {
                write!(f, "key `{key}` is listed more than once")
            }
            ValidationErrorKind::UnknownPartitionKey {
                key,
                table,
                partition_keys,
            } => write!(
                f,
                "key `{key}` is not a partition key of table {table} (partition keys: [{}])",
                partition_keys.join(", ")
            ),
        }
    }
}

impl Error {
    pub fn validation(kind: ValidationErrorKind) -> Error {
        Error::from(ErrorKind::Validation(ValidationError { kind }))
    }

    /// Returns `true` if the definition was rejected locally.
    pub fn is_validation(&self) -> bool {
        matches!(self.classified(), ErrorKind::Validation(_))
    }

    /// Returns the validation failure, if this is a validation error.
    pub fn validation_kind(&self) -> Option<&ValidationErrorKind> {
        match self.classified() {
            ErrorKind::Validation(err) => Some(&err.kind),
            _ => None,
        }
    }
}
