use topboard_core::ScoreEntry;

use crate::error::PersistResult;

/// Durable home for the leaderboard standings.
///
/// Implementations store one snapshot at a time; every `save` overwrites the
/// previous one.
pub trait SnapshotStore: Send + Sync {
    /// Read the last saved snapshot.
    ///
    /// Returns `Ok(None)` if nothing has been saved yet.
    /// Returns `Err` on I/O failure or unreadable contents.
    fn load(&self) -> PersistResult<Option<Vec<ScoreEntry>>>;

    /// Replace the stored snapshot with `entries`, preserving their order.
    fn save(&self, entries: &[ScoreEntry]) -> PersistResult<()>;
}
