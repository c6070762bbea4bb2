use super::{Error, ErrorKind};

/// Error the catalog service rejected for good: authorization failures,
/// malformed input, exceeded quotas.
///
/// Fatal errors are surfaced immediately and never retried.
#[derive(Debug)]
pub(super) struct FatalError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for FatalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for FatalError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("catalog request rejected: ")?;
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a driver error that must not be retried.
    pub fn fatal(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Fatal(FatalError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a non-retryable service rejection.
    pub fn is_fatal(&self) -> bool {
        matches!(self.classified(), ErrorKind::Fatal(_))
    }
}
