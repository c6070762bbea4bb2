use super::{Error, ErrorKind};

/// Which entity turned out to be missing.
///
/// A partition index is gone when the index itself, its table, or its database
/// is gone. Callers that only care whether the index exists should use
/// [`Error::is_not_found`], which is `true` for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundCause {
    Index,
    Table,
    Database,
    /// The catalog reported a missing entity without saying which one.
    Unknown,
}

#[derive(Debug)]
pub(super) struct NotFoundError {
    cause: NotFoundCause,
    context: Option<Box<str>>,
}

impl std::error::Error for NotFoundError {}

impl core::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(match self.cause {
            NotFoundCause::Index => "partition index not found",
            NotFoundCause::Table => "table not found",
            NotFoundCause::Database => "database not found",
            NotFoundCause::Unknown => "entity not found",
        })?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {}", ctx)?;
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error for a missing entity.
    pub fn not_found(cause: NotFoundCause, context: impl Into<String>) -> Error {
        let context = context.into();
        Error::from(ErrorKind::NotFound(NotFoundError {
            cause,
            context: (!context.is_empty()).then(|| context.into_boxed_str()),
        }))
    }

    /// Returns `true` if the entity (or one of its parents) does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self.classified(), ErrorKind::NotFound(_))
    }

    /// Returns which entity was missing, if this is a not-found error.
    pub fn not_found_cause(&self) -> Option<NotFoundCause> {
        match self.classified() {
            ErrorKind::NotFound(err) => Some(err.cause),
            _ => None,
        }
    }
}
