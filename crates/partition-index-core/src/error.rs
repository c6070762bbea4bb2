mod adhoc;
mod already_exists;
mod cancelled;
mod fatal;
mod index_failed;
mod invalid_import_id;
mod invalid_result;
mod not_found;
mod timeout;
mod transient;
mod validation;

use adhoc::AdhocError;
use already_exists::AlreadyExistsError;
use cancelled::CancelledError;
use fatal::FatalError;
use index_failed::IndexFailedError;
use invalid_import_id::InvalidImportIdError;
use invalid_result::InvalidResultError;
use not_found::NotFoundError;
use std::sync::Arc;
use timeout::TimeoutError;
use transient::TransientError;
use validation::ValidationError;

pub use not_found::NotFoundCause;
pub use validation::ValidationErrorKind;

/// Builds an ad-hoc error from a format string.
///
/// Mostly useful as the argument of [`Error::context`].
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error returned by a catalog driver or by the lifecycle manager.
#[derive(Clone)]
pub struct Error {
    inner: Option<Arc<ErrorInner>>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: Arc<ErrorKind>,
    cause: Option<Error>,
}

impl Error {
    /// Adds context to this error.
    ///
    /// Context is displayed in reverse order: the most recently added context is shown first,
    /// followed by earlier context, ending with the root cause.
    #[inline(always)]
    pub fn context(self, consequent: impl IntoError) -> Error {
        self.context_impl(consequent.into_error())
    }

    #[inline(never)]
    #[cold]
    fn context_impl(self, mut consequent: Error) -> Error {
        if let Some(inner) = consequent.inner.as_mut().and_then(Arc::get_mut) {
            if inner.cause.is_none() {
                inner.cause = Some(self);
                return consequent;
            }
        }

        // The consequent is shared or already chained. A cause-less node can
        // share its kind; a chained one only keeps its message.
        let kind = match consequent.inner.as_ref() {
            Some(inner) if inner.cause.is_none() => inner.kind.clone(),
            _ => Arc::new(ErrorKind::Adhoc(AdhocError::new(consequent.to_string()))),
        };

        Error {
            inner: Some(Arc::new(ErrorInner {
                kind,
                cause: Some(self),
            })),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.as_ref().and_then(|inner| inner.cause.as_ref())?;
            Some(err)
        }))
    }

    fn kind(&self) -> &ErrorKind {
        self.inner
            .as_ref()
            .map(|inner| &*inner.kind)
            .unwrap_or(&ErrorKind::Unknown)
    }

    /// The kind that classifies this error: the outermost kind in the chain
    /// that is not free-form context.
    fn classified(&self) -> &ErrorKind {
        self.chain()
            .map(Error::kind)
            .find(|kind| !matches!(kind, ErrorKind::Adhoc(_) | ErrorKind::Unknown))
            .unwrap_or_else(|| self.kind())
    }

    /// Returns `true` if retrying the failed call may succeed.
    ///
    /// Only transient errors (throttling, service-side 5xx, network failures)
    /// are retryable. Authorization and validation failures never are.
    pub fn is_retryable(&self) -> bool {
        self.is_transient()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Transient(err) => err.source(),
            ErrorKind::Fatal(err) => err.source(),
            _ => self
                .inner
                .as_ref()
                .and_then(|inner| inner.cause.as_ref())
                .map(|cause| cause as &(dyn std::error::Error + 'static)),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(err.kind(), f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            let Some(ref inner) = self.inner else {
                return f.debug_struct("Error").field("kind", &"None").finish();
            };
            f.debug_struct("Error")
                .field("kind", &inner.kind)
                .field("cause", &inner.cause)
                .finish()
        }
    }
}

#[derive(Debug)]
enum ErrorKind {
    Adhoc(AdhocError),
    AlreadyExists(AlreadyExistsError),
    Cancelled(CancelledError),
    Fatal(FatalError),
    IndexFailed(IndexFailedError),
    InvalidImportId(InvalidImportIdError),
    InvalidResult(InvalidResultError),
    NotFound(NotFoundError),
    Timeout(TimeoutError),
    Transient(TransientError),
    Validation(ValidationError),
    Unknown,
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match self {
            Adhoc(err) => core::fmt::Display::fmt(err, f),
            AlreadyExists(err) => core::fmt::Display::fmt(err, f),
            Cancelled(err) => core::fmt::Display::fmt(err, f),
            Fatal(err) => core::fmt::Display::fmt(err, f),
            IndexFailed(err) => core::fmt::Display::fmt(err, f),
            InvalidImportId(err) => core::fmt::Display::fmt(err, f),
            InvalidResult(err) => core::fmt::Display::fmt(err, f),
            NotFound(err) => core::fmt::Display::fmt(err, f),
            Timeout(err) => core::fmt::Display::fmt(err, f),
            Transient(err) => core::fmt::Display::fmt(err, f),
            Validation(err) => core::fmt::Display::fmt(err, f),
            Unknown => f.write_str("unknown partition index error"),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Some(Arc::new(ErrorInner {
                kind: Arc::new(kind),
                cause: None,
            })),
        }
    }
}

/// Trait for types that can be converted into an Error.
pub trait IntoError {
    /// Converts this type into an Error.
    fn into_error(self) -> Error;
}

impl IntoError for Error {
    #[inline(always)]
    fn into_error(self) -> Error {
        self
    }
}
