mod response;
pub use response::Response;

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::{fmt::Debug, sync::Arc};

/// A data catalog backend.
///
/// Drivers translate [`Operation`]s into calls against a concrete catalog
/// and report failures using the shared error taxonomy:
///
/// - a missing database, table or index is [`Error::not_found`](crate::Error::not_found)
/// - a duplicate create is [`Error::already_exists`](crate::Error::already_exists)
/// - throttling, internal service errors and network failures are
///   [`Error::transient`](crate::Error::transient)
/// - authorization and input rejections are [`Error::fatal`](crate::Error::fatal)
///
/// Drivers do not retry; retry policy belongs to the caller.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Short name used in logs, e.g. `glue` or `memory`
    fn name(&self) -> &'static str;

    /// Execute a catalog operation
    async fn exec(&self, op: Operation) -> crate::Result<Response>;
}

#[async_trait]
impl<D: Driver + ?Sized> Driver for Arc<D> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}

#[async_trait]
impl<D: Driver + ?Sized> Driver for Box<D> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn exec(&self, op: Operation) -> crate::Result<Response> {
        (**self).exec(op).await
    }
}
