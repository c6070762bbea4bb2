#[macro_use]
mod macros;

pub mod check;

mod exec_log;
pub use exec_log::{DriverOp, ExecLog};

mod fixture;
pub use fixture::Fixture;

mod isolate;
use isolate::Isolate;

mod logging_driver;
use logging_driver::LoggingDriver;

mod setup;
pub use setup::Setup;

pub use test::Test;

/// Scenario implementations
pub mod tests;

mod prelude {
    pub(crate) use crate::{check, Test};
    pub(crate) use crate::tests::skip;
    pub(crate) use anyhow::{bail, ensure, Result};
}
