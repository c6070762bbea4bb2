mod catalog;
use catalog::{Catalog, Settle};

mod fault;
pub use fault::{Fault, FaultKind};

use partition_index_core::{
    async_trait,
    driver::{Driver, Operation, Response},
    Error, Result,
};
use std::sync::{Arc, Mutex, MutexGuard};
use url::Url;

/// Number of reads a new or deleted index spends in a transitional status
/// unless configured otherwise.
const DEFAULT_SETTLE_READS: u32 = 1;

/// An in-process data catalog.
///
/// Behaves like the hosted catalog where partition indexes are concerned:
/// indexes are created `CREATING` and turn `ACTIVE` only after being read a
/// few times, deletions go through `DELETING`, deleting a table or database
/// takes its indexes with it, and missing parents are reported as not found.
///
/// Cloning returns another handle to the same catalog, so a test can keep a
/// handle for fault injection after giving one to the manager.
#[derive(Debug, Clone)]
pub struct Memory {
    shared: Arc<Mutex<Shared>>,
}

#[derive(Debug)]
struct Shared {
    catalog: Catalog,
    faults: Vec<Fault>,
    settle_reads: u32,
    settle: Settle,
}

impl Memory {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                catalog: Catalog::default(),
                faults: vec![],
                settle_reads: DEFAULT_SETTLE_READS,
                settle: Settle::Activate,
            })),
        }
    }

    /// Create an in-memory catalog from a connection URL.
    ///
    /// Accepts `memory://` with an optional `settle_reads` query parameter.
    pub fn connect(url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(Error::fatal)?;

        if url.scheme() != "memory" {
            return Err(partition_index_core::err!(
                "connection URL does not have a `memory` scheme; url={url}"
            ));
        }

        let memory = Memory::new();

        for (key, value) in url.query_pairs() {
            match &*key {
                "settle_reads" => {
                    let reads = value.parse::<u32>().map_err(Error::fatal)?;
                    memory.set_settle_reads(reads);
                }
                other => {
                    return Err(partition_index_core::err!(
                        "unsupported memory catalog option `{other}`; url={url}"
                    ))
                }
            }
        }

        Ok(memory)
    }

    /// Sets how many reads a new or deleted index stays transitional for.
    pub fn set_settle_reads(&self, reads: u32) {
        self.lock().settle_reads = reads;
    }

    /// Fails the next executions of an operation.
    pub fn inject(&self, fault: Fault) {
        self.lock().faults.push(fault);
    }

    /// Keeps indexes created from now on in `CREATING` forever.
    pub fn stall_index_creation(&self) {
        self.lock().settle = Settle::Stall;
    }

    /// Makes indexes created from now on settle in `FAILED`.
    pub fn fail_index_creation(&self, backfill_error: impl Into<String>) {
        self.lock().settle = Settle::Fail(backfill_error.into());
    }

    /// Restores normal index creation.
    pub fn activate_index_creation(&self) {
        self.lock().settle = Settle::Activate;
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        // A panic while holding the lock cannot leave the catalog half
        // updated: every mutation is a single map operation.
        self.shared
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Memory::new()
    }
}

#[async_trait]
impl Driver for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        let mut shared = self.lock();
        let name = op.name();

        let fault = shared.take_fault(name);

        if let Some(fault) = &fault {
            if !fault.kind.takes_effect() {
                tracing::debug!(operation = name, kind = ?fault.kind, "injecting fault");
                return Err(fault.to_error());
            }
        }

        tracing::trace!(operation = name, "memory catalog exec");

        let res = shared.dispatch(op);

        match fault {
            Some(fault) => {
                tracing::debug!(operation = name, kind = ?fault.kind, "dropping response");
                res?;
                Err(fault.to_error())
            }
            None => res,
        }
    }
}

impl Shared {
    fn take_fault(&mut self, operation: &str) -> Option<Fault> {
        let fault = self
            .faults
            .iter_mut()
            .find(|fault| fault.operation == operation && fault.remaining > 0)?;

        fault.remaining -= 1;
        let taken = fault.clone();
        self.faults.retain(|fault| fault.remaining > 0);
        Some(taken)
    }

    fn dispatch(&mut self, op: Operation) -> Result<Response> {
        let settle_reads = self.settle_reads;
        let settle = self.settle.clone();
        let catalog = &mut self.catalog;

        match op {
            Operation::CreateDatabase(op) => catalog.create_database(op),
            Operation::CreatePartitionIndex(op) => {
                catalog.create_partition_index(op, settle_reads, settle)
            }
            Operation::CreateTable(op) => catalog.create_table(op),
            Operation::DeleteDatabase(op) => catalog.delete_database(op),
            Operation::DeletePartitionIndex(op) => catalog.delete_partition_index(op, settle_reads),
            Operation::DeleteTable(op) => catalog.delete_table(op),
            Operation::GetDatabase(op) => catalog.get_database(op),
            Operation::GetPartitionIndexes(op) => catalog.get_partition_indexes(op),
            Operation::GetTable(op) => catalog.get_table(op),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use partition_index_core::{
        driver::operation,
        schema::{Column, Database, IndexStatus, PartitionIndex, Table, TableRef},
        NotFoundCause,
    };

    fn table_ref() -> TableRef {
        TableRef::new("d", "t")
    }

    async fn setup(memory: &Memory) {
        memory
            .exec(
                operation::CreateDatabase {
                    database: Database::new("d"),
                }
                .into(),
            )
            .await
            .unwrap();

        memory
            .exec(
                operation::CreateTable {
                    table: Table::new("d", "t")
                        .partition_key(Column::new("c1", "int"))
                        .partition_key(Column::new("c2", "string")),
                }
                .into(),
            )
            .await
            .unwrap();
    }

    async fn create_index(memory: &Memory, name: &str, keys: &[&str]) -> Result<Response> {
        memory
            .exec(
                operation::CreatePartitionIndex {
                    table: table_ref(),
                    index: PartitionIndex {
                        name: name.to_string(),
                        keys: keys.iter().map(|k| k.to_string()).collect(),
                    },
                }
                .into(),
            )
            .await
    }

    async fn statuses(memory: &Memory) -> Result<Vec<(String, IndexStatus)>> {
        let indexes = memory
            .exec(operation::GetPartitionIndexes { table: table_ref() }.into())
            .await?
            .into_partition_indexes()?;

        Ok(indexes.into_iter().map(|i| (i.name, i.status)).collect())
    }

    #[tokio::test]
    async fn index_settles_after_reads() {
        let memory = Memory::new();
        setup(&memory).await;

        create_index(&memory, "idx", &["c1", "c2"]).await.unwrap();

        assert_eq!(
            statuses(&memory).await.unwrap(),
            [("idx".to_string(), IndexStatus::Creating)]
        );
        assert_eq!(
            statuses(&memory).await.unwrap(),
            [("idx".to_string(), IndexStatus::Active)]
        );
    }

    #[tokio::test]
    async fn deleting_index_goes_away_after_reads() {
        let memory = Memory::new();
        memory.set_settle_reads(0);
        setup(&memory).await;

        create_index(&memory, "idx", &["c1"]).await.unwrap();
        memory.set_settle_reads(1);

        memory
            .exec(
                operation::DeletePartitionIndex {
                    table: table_ref(),
                    index_name: "idx".to_string(),
                }
                .into(),
            )
            .await
            .unwrap();

        assert_eq!(
            statuses(&memory).await.unwrap(),
            [("idx".to_string(), IndexStatus::Deleting)]
        );
        assert!(statuses(&memory).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_index_name() {
        let memory = Memory::new();
        setup(&memory).await;

        create_index(&memory, "idx", &["c1"]).await.unwrap();
        let err = create_index(&memory, "idx", &["c2"]).await.unwrap_err();
        assert!(err.is_already_exists());
    }

    #[tokio::test]
    async fn keys_must_be_partition_keys() {
        let memory = Memory::new();
        setup(&memory).await;

        let err = create_index(&memory, "idx", &["nope"]).await.unwrap_err();
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn deleting_parents_cascades() {
        let memory = Memory::new();
        setup(&memory).await;
        create_index(&memory, "idx", &["c1"]).await.unwrap();

        memory
            .exec(operation::DeleteTable { table: table_ref() }.into())
            .await
            .unwrap();
        let err = statuses(&memory).await.unwrap_err();
        assert_eq!(err.not_found_cause(), Some(NotFoundCause::Table));

        memory
            .exec(
                operation::DeleteDatabase {
                    name: "d".to_string(),
                }
                .into(),
            )
            .await
            .unwrap();
        let err = statuses(&memory).await.unwrap_err();
        assert_eq!(err.not_found_cause(), Some(NotFoundCause::Database));
    }

    #[tokio::test]
    async fn injected_faults_are_consumed() {
        let memory = Memory::new();
        setup(&memory).await;

        memory.inject(Fault::new("GetPartitionIndexes", FaultKind::Throttling, 2));

        assert!(statuses(&memory).await.unwrap_err().is_transient());
        assert!(statuses(&memory).await.unwrap_err().is_transient());
        assert!(statuses(&memory).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lost_responses_still_take_effect() {
        let memory = Memory::new();
        setup(&memory).await;

        memory.inject(Fault::new("CreatePartitionIndex", FaultKind::ResponseLost, 1));

        let err = create_index(&memory, "idx", &["c1"]).await.unwrap_err();
        assert!(err.is_transient());
        assert!(err.is_outcome_unknown());
        assert_eq!(statuses(&memory).await.unwrap().len(), 1);

        let err = create_index(&memory, "idx", &["c1"]).await.unwrap_err();
        assert!(err.is_already_exists());
    }

    #[tokio::test]
    async fn fatal_faults() {
        let memory = Memory::new();
        setup(&memory).await;

        memory.inject(Fault::new("CreatePartitionIndex", FaultKind::AccessDenied, 1));

        let err = create_index(&memory, "idx", &["c1"]).await.unwrap_err();
        assert!(err.is_fatal());
        assert_eq!(
            err.to_string(),
            "catalog request rejected: AccessDeniedException: injected into CreatePartitionIndex"
        );
    }

    #[tokio::test]
    async fn stalled_creation_resumes() {
        let memory = Memory::new();
        memory.set_settle_reads(0);
        memory.stall_index_creation();
        setup(&memory).await;

        create_index(&memory, "stuck", &["c1"]).await.unwrap();
        assert_eq!(
            statuses(&memory).await.unwrap(),
            [("stuck".to_string(), IndexStatus::Creating)]
        );

        memory.activate_index_creation();
        create_index(&memory, "idx", &["c2"]).await.unwrap();

        let mut statuses = statuses(&memory).await.unwrap();
        statuses.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            statuses,
            [
                ("idx".to_string(), IndexStatus::Active),
                ("stuck".to_string(), IndexStatus::Creating),
            ]
        );
    }

    #[tokio::test]
    async fn failed_creation_reports_backfill_errors() {
        let memory = Memory::new();
        memory.set_settle_reads(0);
        memory.fail_index_creation("column type mismatch");
        setup(&memory).await;

        create_index(&memory, "idx", &["c1"]).await.unwrap();

        let indexes = memory
            .exec(operation::GetPartitionIndexes { table: table_ref() }.into())
            .await
            .unwrap()
            .into_partition_indexes()
            .unwrap();

        assert_eq!(indexes[0].status, IndexStatus::Failed);
        assert_eq!(indexes[0].backfill_errors, ["column type mismatch"]);
    }

    #[test]
    fn connect_url() {
        assert!(Memory::connect("memory://").is_ok());
        assert!(Memory::connect("memory://?settle_reads=3").is_ok());
        assert!(Memory::connect("glue://").is_err());
        assert!(Memory::connect("memory://?flavor=x").is_err());
    }
}
