use super::{Error, ErrorKind};

/// Error when a driver answers an operation with an unexpected response shape.
#[derive(Debug)]
pub(super) struct InvalidResultError {
    message: Box<str>,
}

impl std::error::Error for InvalidResultError {}

impl core::fmt::Display for InvalidResultError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid result: {}", self.message)
    }
}

impl Error {
    pub fn invalid_result(message: impl Into<String>) -> Error {
        Error::from(ErrorKind::InvalidResult(InvalidResultError {
            message: message.into().into_boxed_str(),
        }))
    }

    pub fn is_invalid_result(&self) -> bool {
        matches!(self.classified(), ErrorKind::InvalidResult(_))
    }
}
