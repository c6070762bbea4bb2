use partition_index_core::{Error, NotFoundCause};

use aws_sdk_glue::error::{ProvideErrorMetadata, SdkError};

/// Service error codes worth retrying.
const TRANSIENT_CODES: &[&str] = &[
    "ThrottlingException",
    "InternalServiceException",
    "OperationTimeoutException",
    "ConcurrentModificationException",
    "ServiceUnavailableException",
];

pub(crate) trait SdkErrorExt {
    /// Maps an SDK failure onto the shared error taxonomy.
    ///
    /// `missing` names the entity an `EntityNotFoundException` most likely
    /// refers to; the message is consulted first when it says more.
    fn into_catalog_error(self, missing: NotFoundCause, context: impl FnOnce() -> String) -> Error;
}

impl<E, R> SdkErrorExt for SdkError<E, R>
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn into_catalog_error(self, missing: NotFoundCause, context: impl FnOnce() -> String) -> Error {
        if matches!(
            self,
            SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_)
        ) {
            // No response arrived; the request may still have been applied
            return Error::outcome_unknown(self);
        }

        if !matches!(self, SdkError::ServiceError(_)) {
            return Error::fatal(self);
        }

        let code = self.code().map(str::to_owned);

        match code.as_deref() {
            Some("EntityNotFoundException") => {
                let cause = missing_entity(self.message(), missing);
                Error::not_found(cause, context())
            }
            Some("AlreadyExistsException") => Error::already_exists(context()),
            Some(code) if TRANSIENT_CODES.contains(&code) => Error::transient(self),
            _ => Error::fatal(self),
        }
    }
}

/// Glue reports a missing parent as e.g. `Database foo not found.` or
/// `Table bar not found.` for any call scoped to that parent.
pub(crate) fn missing_entity(message: Option<&str>, default: NotFoundCause) -> NotFoundCause {
    match message {
        Some(message) if message.starts_with("Database ") => NotFoundCause::Database,
        Some(message) if message.starts_with("Table ") => NotFoundCause::Table,
        Some(message) if message.starts_with("Partition index") => NotFoundCause::Index,
        _ => default,
    }
}
