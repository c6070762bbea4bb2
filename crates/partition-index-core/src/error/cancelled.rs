use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct CancelledError {
    operation: Box<str>,
}

impl std::error::Error for CancelledError {}

impl core::fmt::Display for CancelledError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} was cancelled", self.operation)
    }
}

impl Error {
    /// Creates an error for an operation the caller aborted before it finished.
    pub fn cancelled(operation: impl Into<String>) -> Error {
        Error::from(ErrorKind::Cancelled(CancelledError {
            operation: operation.into().into_boxed_str(),
        }))
    }

    /// Returns `true` if the operation was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.classified(), ErrorKind::Cancelled(_))
    }
}
