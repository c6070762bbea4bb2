use super::{Error, ErrorKind};

/// Error that may go away on retry.
///
/// This wraps throttling responses, internal service errors, request timeouts
/// and connection failures reported by the underlying SDK.
#[derive(Debug)]
pub(super) struct TransientError {
    inner: Box<dyn std::error::Error + Send + Sync>,
    /// The request may have been applied even though it failed
    outcome_unknown: bool,
}

impl std::error::Error for TransientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for TransientError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.outcome_unknown {
            f.write_str("transient failure (outcome unknown): ")?;
        } else {
            f.write_str("transient failure: ")?;
        }
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
    /// Wraps a driver error that is worth retrying.
    pub fn transient(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Transient(TransientError {
            inner: Box::new(err),
            outcome_unknown: false,
        }))
    }

    /// Wraps a retryable driver error where the request may still have been
    /// applied, e.g. a timed out request or a lost response.
    pub fn outcome_unknown(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(ErrorKind::Transient(TransientError {
            inner: Box::new(err),
            outcome_unknown: true,
        }))
    }

    /// Returns `true` if this error is transient.
    pub fn is_transient(&self) -> bool {
        matches!(self.classified(), ErrorKind::Transient(_))
    }

    /// Returns `true` if the failed request may have been applied anyway.
    ///
    /// Exhausted retries keep the flag of the last attempt.
    pub fn is_outcome_unknown(&self) -> bool {
        self.chain().any(|err| {
            matches!(
                err.kind(),
                ErrorKind::Transient(TransientError {
                    outcome_unknown: true,
                    ..
                })
            )
        })
    }
}
