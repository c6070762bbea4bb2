use super::{Error, ErrorKind};

/// Error when creating an entity whose identity is already taken.
#[derive(Debug)]
pub(super) struct AlreadyExistsError {
    context: Box<str>,
}

impl std::error::Error for AlreadyExistsError {}

impl core::fmt::Display for AlreadyExistsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "already exists: {}", self.context)
    }
}

impl Error {
    /// Creates an error for a duplicate create, e.g. a second partition index
    /// with the same name on the same table.
    pub fn already_exists(context: impl Into<String>) -> Error {
        Error::from(ErrorKind::AlreadyExists(AlreadyExistsError {
            context: context.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if this error is a duplicate-create error.
    pub fn is_already_exists(&self) -> bool {
        matches!(self.classified(), ErrorKind::AlreadyExists(_))
    }
}
