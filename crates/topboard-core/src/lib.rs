//! Bounded top-N score structure for the topboard leaderboard.
//!
//! [`BoundedTopStore`] keeps the highest-scoring [`ScoreEntry`] values seen so
//! far, up to a fixed capacity. Internally it is an array-backed binary
//! min-heap keyed on score: the root is always the weakest retained entry, so
//! deciding whether a new score makes the board is a single comparison.
//!
//! # Design Rules
//!
//! 1. The store never holds more than `capacity` entries.
//! 2. At capacity, a new entry must be strictly greater than the current
//!    minimum to get in. Existing entries win ties.
//! 3. Reads never reorder the heap.
//! 4. The store performs no validation, locking or I/O. Callers validate input
//!    and serialize access.

pub mod entry;
pub mod store;

pub use entry::ScoreEntry;
pub use store::{BoundedTopStore, InsertOutcome, DEFAULT_CAPACITY};
