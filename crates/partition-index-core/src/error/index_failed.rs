use super::{Error, ErrorKind};

/// Error when the catalog reports a partition index in the `FAILED` state.
#[derive(Debug)]
pub(super) struct IndexFailedError {
    index: Box<str>,
    backfill_errors: Vec<String>,
}

impl std::error::Error for IndexFailedError {}

impl core::fmt::Display for IndexFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "partition index {} failed", self.index)?;
        if !self.backfill_errors.is_empty() {
            write!(f, " ({})", self.backfill_errors.join("; "))?;
        }
        Ok(())
    }
}

impl Error {
    pub fn index_failed(index: impl Into<String>, backfill_errors: Vec<String>) -> Error {
        Error::from(ErrorKind::IndexFailed(IndexFailedError {
            index: index.into().into_boxed_str(),
            backfill_errors,
        }))
    }

    /// Returns `true` if the index ended up in the `FAILED` state.
    pub fn is_index_failed(&self) -> bool {
        matches!(self.classified(), ErrorKind::IndexFailed(_))
    }
}
