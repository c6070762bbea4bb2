use std::time::Duration;

use super::{Error, ErrorKind};

#[derive(Debug)]
pub(super) struct TimeoutError {
    operation: Box<str>,
    elapsed: Duration,
}

impl std::error::Error for TimeoutError {}

impl core::fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{} timed out after {:?}", self.operation, self.elapsed)
    }
}

impl Error {
    /// Creates an error for an operation that did not reach a stable state in
    /// time, or whose retries were exhausted.
    pub fn timeout(operation: impl Into<String>, elapsed: Duration) -> Error {
        Error::from(ErrorKind::Timeout(TimeoutError {
            operation: operation.into().into_boxed_str(),
            elapsed,
        }))
    }

    /// Returns `true` if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.classified(), ErrorKind::Timeout(_))
    }
}
