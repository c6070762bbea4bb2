//! Checks run against the catalog between scenario steps.

use anyhow::{bail, Context, Result};
use partition_index::{
    driver::operation,
    schema::{IndexId, RemoteIndexState, TableRef},
    Manager,
};

/// Passes if the index can be read back.
pub async fn exists(manager: &Manager, id: &IndexId) -> Result<RemoteIndexState> {
    manager
        .read(id)
        .await
        .with_context(|| format!("partition index {id} should exist"))
}

/// Passes if the index reads back as not found.
///
/// Any other read failure fails the check: an index that cannot be read is
/// not known to be gone.
pub async fn destroyed(manager: &Manager, id: &IndexId) -> Result<()> {
    match manager.read(id).await {
        Ok(state) => bail!(
            "partition index {id} still exists; status={}",
            state.status
        ),
        Err(err) if err.is_not_found() => Ok(()),
        Err(err) => {
            Err(anyhow::Error::new(err).context(format!("checking that {id} was destroyed")))
        }
    }
}

/// Deletes the index behind the manager's back.
pub async fn disappears(manager: &Manager, id: &IndexId) -> Result<()> {
    manager
        .delete(id)
        .await
        .with_context(|| format!("deleting partition index {id} out of band"))
}

/// Deletes the index's table behind the manager's back.
pub async fn table_disappears(manager: &Manager, table: &TableRef) -> Result<()> {
    manager
        .exec(operation::DeleteTable {
            table: table.clone(),
        })
        .await
        .with_context(|| format!("deleting table {table} out of band"))?;

    Ok(())
}

/// Deletes the index's database behind the manager's back.
pub async fn database_disappears(manager: &Manager, name: &str) -> Result<()> {
    manager
        .exec(operation::DeleteDatabase {
            name: name.to_string(),
        })
        .await
        .with_context(|| format!("deleting database {name} out of band"))?;

    Ok(())
}
