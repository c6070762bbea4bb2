use super::Manager;
use crate::Result;
use partition_index_core::schema::{PartitionIndexSpec, RemoteIndexState};

/// How a partition index in the catalog differs from its definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drift {
    /// The index matches its definition
    Unchanged(RemoteIndexState),

    /// The index, or one of its parents, no longer exists
    Deleted,

    /// The index exists with different keys. Keys cannot be changed in
    /// place, so the index has to be replaced.
    Modified { observed: RemoteIndexState },
}

impl Drift {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Drift::Unchanged(_))
    }

    /// Returns `true` if converging means deleting the index and creating it
    /// again.
    pub fn requires_replacement(&self) -> bool {
        matches!(self, Drift::Modified { .. })
    }
}

impl Manager {
    /// Compares an index definition with the partition index currently in the catalog.
    pub async fn detect_drift(&self, spec: &PartitionIndexSpec) -> Result<Drift> {
        let id = spec.id();

        let observed = match self.read(&id).await {
            Ok(observed) => observed,
            Err(err) if err.is_not_found() => {
                tracing::debug!(index = %id, cause = ?err.not_found_cause(), "drift: deleted");
                return Ok(Drift::Deleted);
            }
            Err(err) => return Err(err),
        };

        // Key order is part of the index definition
        if observed.keys != spec.keys {
            tracing::debug!(
                index = %id,
                expected = ?spec.keys,
                observed = ?observed.keys,
                "drift: keys modified"
            );
            return Ok(Drift::Modified { observed });
        }

        Ok(Drift::Unchanged(observed))
    }
}
