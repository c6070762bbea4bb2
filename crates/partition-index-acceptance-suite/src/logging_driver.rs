use crate::DriverOp;

use partition_index_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    Result,
};
use std::sync::{Arc, Mutex};

/// A driver wrapper that records every call for the scenario to inspect.
///
/// Each attempt made by the retry loop is recorded separately, failures
/// included.
#[derive(Debug)]
pub struct LoggingDriver {
    inner: Box<dyn Driver>,

    /// Shared with the test's [`ExecLog`](crate::ExecLog)
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn exec(&self, operation: Operation) -> Result<Response> {
        let logged = operation.clone();
        let response = self.inner.exec(operation).await;

        self.ops_log
            .lock()
            .expect("failed to acquire ops log lock")
            .push(DriverOp {
                operation: logged,
                response: response.clone(),
            });

        response
    }
}
