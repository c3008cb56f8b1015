use std::num::NonZeroUsize;
use std::sync::Arc;

use topboard_core::{BoundedTopStore, InsertOutcome, ScoreEntry};
use topboard_persist::SnapshotStore;
use tracing::{debug, info, warn};

/// The live leaderboard: the in-memory top-N store plus its durable snapshot.
///
/// Every mutation is followed by a save of the full standings. A failed save
/// is logged and otherwise ignored: the in-memory board stays authoritative
/// and the next successful save catches the snapshot up.
pub struct Leaderboard {
    store: BoundedTopStore,
    snapshot: Arc<dyn SnapshotStore>,
}

impl Leaderboard {
    /// Build a board from whatever the snapshot holds.
    ///
    /// Saved entries are replayed through the normal insert path, in saved
    /// order. An unreadable snapshot is logged and the board starts empty.
    pub fn restore(capacity: NonZeroUsize, snapshot: Arc<dyn SnapshotStore>) -> Self {
        let mut store = BoundedTopStore::new(capacity);
        match snapshot.load() {
            Ok(Some(entries)) => {
                let total = entries.len();
                let retained = store.replay(entries);
                info!(total, retained, capacity = capacity.get(), "leaderboard restored");
            }
            Ok(None) => info!("no saved leaderboard, starting empty"),
            Err(e) => warn!(error = %e, "failed to load leaderboard, starting empty"),
        }
        Self { store, snapshot }
    }

    /// Record a validated score and return the resulting standings.
    pub fn submit(&mut self, entry: ScoreEntry) -> Vec<ScoreEntry> {
        match self.store.insert(entry) {
            InsertOutcome::Added => debug!(len = self.store.len(), "score added"),
            InsertOutcome::Replaced(evicted) => {
                debug!(evicted = %evicted, "score replaced board minimum")
            }
            InsertOutcome::Discarded(entry) => {
                debug!(entry = %entry, min = ?self.store.min_score(), "score below board minimum")
            }
        }
        let standings = self.store.sorted_scores();
        self.persist(&standings);
        standings
    }

    pub fn clear(&mut self) {
        self.store.clear();
        info!("leaderboard cleared");
        self.persist(&[]);
    }

    pub fn standings(&self) -> Vec<ScoreEntry> {
        self.store.sorted_scores()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn persist(&self, standings: &[ScoreEntry]) {
        if let Err(e) = self.snapshot.save(standings) {
            warn!(error = %e, "failed to persist leaderboard");
        }
    }
}

impl std::fmt::Debug for Leaderboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Leaderboard")
            .field("capacity", &self.store.capacity())
            .field("len", &self.store.len())
            .finish()
    }
}
