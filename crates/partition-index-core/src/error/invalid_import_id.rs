use super::{Error, ErrorKind};

/// Error when an import identifier cannot be split into its three parts.
#[derive(Debug)]
pub(super) struct InvalidImportIdError {
    id: Box<str>,
}

impl std::error::Error for InvalidImportIdError {}

impl core::fmt::Display for InvalidImportIdError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid import id `{}`; expected DATABASE_NAME:TABLE_NAME:INDEX_NAME",
            self.id
        )
    }
}

impl Error {
    pub fn invalid_import_id(id: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidImportId(InvalidImportIdError {
            id: id.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is a malformed import identifier.
    pub fn is_invalid_import_id(&self) -> bool {
        matches!(self.classified(), ErrorKind::InvalidImportId(_))
    }
}
