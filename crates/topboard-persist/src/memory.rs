use std::sync::RwLock;

use topboard_core::ScoreEntry;

use crate::error::PersistResult;
use crate::traits::SnapshotStore;

/// In-memory snapshot holder.
///
/// Intended for tests and for running the service without a data file.
#[derive(Debug, Default)]
pub struct InMemorySnapshot {
    entries: RwLock<Option<Vec<ScoreEntry>>>,
}

impl InMemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing snapshot, as if it had been saved earlier.
    pub fn with_entries(entries: Vec<ScoreEntry>) -> Self {
        Self {
            entries: RwLock::new(Some(entries)),
        }
    }

    /// The last saved snapshot, if any.
    pub fn snapshot(&self) -> Option<Vec<ScoreEntry>> {
        self.entries.read().expect("lock poisoned").clone()
    }
}

impl SnapshotStore for InMemorySnapshot {
    fn load(&self) -> PersistResult<Option<Vec<ScoreEntry>>> {
        Ok(self.snapshot())
    }

    fn save(&self, entries: &[ScoreEntry]) -> PersistResult<()> {
        *self.entries.write().expect("lock poisoned") = Some(entries.to_vec());
        Ok(())
    }
}
