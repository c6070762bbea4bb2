use partition_index_core::{
    driver::{Operation, Response},
    Result,
};
use std::{
    fmt,
    sync::{Arc, Mutex},
};

/// A catalog call as seen by the logging driver.
#[derive(Debug, Clone)]
pub struct DriverOp {
    pub operation: Operation,
    pub response: Result<Response>,
}

/// The catalog calls a scenario made, in order.
pub struct ExecLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl ExecLog {
    pub(crate) fn new(ops: Arc<Mutex<Vec<DriverOp>>>) -> Self {
        Self { ops }
    }

    /// Get the number of logged operations
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    /// Clear the log
    pub fn clear(&mut self) {
        self.ops.lock().unwrap().clear();
    }

    /// Number of logged calls to the catalog API `name`, e.g.
    /// `CreatePartitionIndex`.
    pub fn count(&self, name: &str) -> usize {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|op| op.operation.name() == name)
            .count()
    }

    /// The API names of the logged calls, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .map(|op| op.operation.name())
            .collect()
    }

    /// Remove and return the first operation from the log.
    #[track_caller]
    pub fn pop(&mut self) -> DriverOp {
        let mut ops = self.ops.lock().unwrap();
        if ops.is_empty() {
            panic!("no operations in log");
        } else {
            ops.remove(0)
        }
    }
}

impl fmt::Debug for ExecLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ops = self.ops.lock().unwrap();
        f.debug_struct("ExecLog").field("ops", &*ops).finish()
    }
}
