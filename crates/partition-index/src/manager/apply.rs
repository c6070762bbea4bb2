use super::{Drift, Manager};
use crate::Result;
use partition_index_core::schema::{PartitionIndexSpec, RemoteIndexState};

/// What [`Manager::apply`] did to converge on a spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// Nothing; the index already matched
    Unchanged(RemoteIndexState),

    /// The index was missing and has been created
    Created(RemoteIndexState),

    /// The index had drifted and has been deleted and created again
    Replaced(RemoteIndexState),
}

impl Applied {
    /// The state of the index after applying.
    pub fn state(&self) -> &RemoteIndexState {
        match self {
            Applied::Unchanged(state) | Applied::Created(state) | Applied::Replaced(state) => state,
        }
    }

    pub fn into_state(self) -> RemoteIndexState {
        match self {
            Applied::Unchanged(state) | Applied::Created(state) | Applied::Replaced(state) => state,
        }
    }
}

impl Manager {
    /// Converges the catalog on `spec`.
    pub async fn apply(&self, spec: &PartitionIndexSpec) -> Result<Applied> {
        spec.validate()?;

        match self.detect_drift(spec).await? {
            Drift::Unchanged(state) => Ok(Applied::Unchanged(state)),
            Drift::Deleted => Ok(Applied::Created(self.create(spec).await?)),
            Drift::Modified { observed } => {
                tracing::info!(
                    index = %observed.id(),
                    from = ?observed.keys,
                    to = ?spec.keys,
                    "replacing partition index"
                );
                self.delete(&observed.id()).await?;
                Ok(Applied::Replaced(self.create(spec).await?))
            }
        }
    }
}
