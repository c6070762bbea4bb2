pub mod driver;
pub use driver::Driver;

mod error;
pub use error::{Error, IntoError, NotFoundCause, ValidationErrorKind};

pub mod schema;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
