mod config;
pub use config::Config;

pub mod driver;

mod manager;
pub use manager::{Applied, Builder, Drift, Manager};

mod retry;
pub use retry::RetryConfig;

pub mod schema {
    pub use partition_index_core::schema::*;
}

pub use partition_index_core::{err, Error, NotFoundCause, Result, ValidationErrorKind};
