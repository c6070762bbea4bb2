use crate::fault::InvalidInput;

use partition_index_core::{
    driver::{operation, Response},
    schema::{Database, IndexStatus, PartitionIndex, PartitionIndexDescriptor, Table, TableRef},
    Error, NotFoundCause, Result,
};
use std::collections::BTreeMap;

/// How newly submitted indexes settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Settle {
    /// Become `ACTIVE` after the configured number of reads
    Activate,

    /// Stay `CREATING` forever
    Stall,

    /// Become `FAILED` with the given backfill error
    Fail(String),
}

#[derive(Debug, Default)]
pub(crate) struct Catalog {
    databases: BTreeMap<String, DatabaseEntry>,
}

#[derive(Debug)]
struct DatabaseEntry {
    database: Database,
    tables: BTreeMap<String, TableEntry>,
}

#[derive(Debug)]
struct TableEntry {
    table: Table,

    /// Kept in creation order, which is the order the catalog lists them in
    indexes: Vec<IndexEntry>,
}

#[derive(Debug)]
struct IndexEntry {
    index: PartitionIndex,
    status: IndexStatus,

    /// Reads left before a transitional status settles
    pending_reads: u32,

    /// What `CREATING` settles into
    settle: Settle,
}

impl Catalog {
    pub(crate) fn create_database(&mut self, op: operation::CreateDatabase) -> Result<Response> {
        let name = op.database.name.clone();

        if self.databases.contains_key(&name) {
            return Err(Error::already_exists(format!("database {name}")));
        }

        self.databases.insert(
            name,
            DatabaseEntry {
                database: op.database,
                tables: BTreeMap::new(),
            },
        );

        Ok(Response::Ack)
    }

    pub(crate) fn get_database(&self, op: operation::GetDatabase) -> Result<Response> {
        let entry = self.database(&op.name)?;
        Ok(Response::Database(entry.database.clone()))
    }

    pub(crate) fn delete_database(&mut self, op: operation::DeleteDatabase) -> Result<Response> {
        // Tables and their indexes go with the database
        match self.databases.remove(&op.name) {
            Some(_) => Ok(Response::Ack),
            None => Err(database_not_found(&op.name)),
        }
    }

    pub(crate) fn create_table(&mut self, op: operation::CreateTable) -> Result<Response> {
        let database = self.database_mut(&op.table.database)?;
        let name = op.table.name.clone();

        if database.tables.contains_key(&name) {
            return Err(Error::already_exists(format!("table {}", op.table.table_ref())));
        }

        database.tables.insert(
            name,
            TableEntry {
                table: op.table,
                indexes: vec![],
            },
        );

        Ok(Response::Ack)
    }

    pub(crate) fn get_table(&self, op: operation::GetTable) -> Result<Response> {
        let entry = self.table(&op.table)?;
        Ok(Response::Table(entry.table.clone()))
    }

    pub(crate) fn delete_table(&mut self, op: operation::DeleteTable) -> Result<Response> {
        let database = self.database_mut(&op.table.database)?;

        match database.tables.remove(&op.table.name) {
            Some(_) => Ok(Response::Ack),
            None => Err(table_not_found(&op.table)),
        }
    }

    pub(crate) fn create_partition_index(
        &mut self,
        op: operation::CreatePartitionIndex,
        settle_reads: u32,
        settle: Settle,
    ) -> Result<Response> {
        let entry = self.table_mut(&op.table)?;

        if entry.indexes.iter().any(|i| i.index.name == op.index.name) {
            return Err(Error::already_exists(format!(
                "partition index {} on table {}",
                op.index.name, op.table
            )));
        }

        for key in &op.index.keys {
            if !entry.table.has_partition_key(key) {
                return Err(Error::fatal(InvalidInput(format!(
                    "{key} is not a partition key of table {}",
                    op.table
                ))));
            }
        }

        entry.indexes.push(IndexEntry {
            index: op.index,
            status: IndexStatus::Creating,
            pending_reads: settle_reads,
            settle,
        });

        Ok(Response::Ack)
    }

    /// Lists the indexes of a table. Each read moves transitional indexes one
    /// step closer to their settled status.
    pub(crate) fn get_partition_indexes(
        &mut self,
        op: operation::GetPartitionIndexes,
    ) -> Result<Response> {
        let entry = self.table_mut(&op.table)?;

        entry.indexes.retain_mut(IndexEntry::tick);

        let descriptors = entry
            .indexes
            .iter()
            .map(IndexEntry::descriptor)
            .collect();

        Ok(Response::PartitionIndexes(descriptors))
    }

    pub(crate) fn delete_partition_index(
        &mut self,
        op: operation::DeletePartitionIndex,
        settle_reads: u32,
    ) -> Result<Response> {
        let entry = self.table_mut(&op.table)?;

        let Some(position) = entry
            .indexes
            .iter()
            .position(|index| index.index.name == op.index_name)
        else {
            return Err(Error::not_found(
                NotFoundCause::Index,
                format!("partition index {} on table {}", op.index_name, op.table),
            ));
        };

        if settle_reads == 0 {
            entry.indexes.remove(position);
        } else {
            let index = &mut entry.indexes[position];
            if index.status != IndexStatus::Deleting {
                index.status = IndexStatus::Deleting;
                index.pending_reads = settle_reads;
            }
        }

        Ok(Response::Ack)
    }

    fn database(&self, name: &str) -> Result<&DatabaseEntry> {
        self.databases
            .get(name)
            .ok_or_else(|| database_not_found(name))
    }

    fn database_mut(&mut self, name: &str) -> Result<&mut DatabaseEntry> {
        self.databases
            .get_mut(name)
            .ok_or_else(|| database_not_found(name))
    }

    fn table(&self, table: &TableRef) -> Result<&TableEntry> {
        self.database(&table.database)?
            .tables
            .get(&table.name)
            .ok_or_else(|| table_not_found(table))
    }

    fn table_mut(&mut self, table: &TableRef) -> Result<&mut TableEntry> {
        self.database_mut(&table.database)?
            .tables
            .get_mut(&table.name)
            .ok_or_else(|| table_not_found(table))
    }
}

impl IndexEntry {
    /// Advances the index by one read. Returns `false` once a deleting index
    /// is gone.
    fn tick(&mut self) -> bool {
        match self.status {
            IndexStatus::Creating => match &self.settle {
                Settle::Stall => {}
                _ if self.pending_reads > 0 => self.pending_reads -= 1,
                Settle::Activate => self.status = IndexStatus::Active,
                Settle::Fail(_) => self.status = IndexStatus::Failed,
            },
            IndexStatus::Deleting if self.pending_reads > 0 => self.pending_reads -= 1,
            IndexStatus::Deleting => return false,
            IndexStatus::Active | IndexStatus::Failed => {}
        }

        true
    }

    fn descriptor(&self) -> PartitionIndexDescriptor {
        let mut descriptor = PartitionIndexDescriptor::new(
            &self.index.name,
            self.index.keys.clone(),
            self.status,
        );

        if let (IndexStatus::Failed, Settle::Fail(reason)) = (self.status, &self.settle) {
            descriptor.backfill_errors.push(reason.clone());
        }

        descriptor
    }
}

fn database_not_found(name: &str) -> Error {
    Error::not_found(NotFoundCause::Database, format!("database {name}"))
}

fn table_not_found(table: &TableRef) -> Error {
    Error::not_found(NotFoundCause::Table, format!("table {table}"))
}
