//! Durable snapshots of the topboard leaderboard.
//!
//! The leaderboard is persisted as a whole after every mutation: the current
//! standings are written as a JSON array of `{ "name", "score" }` objects,
//! replacing whatever was there before. On startup the array is read back and
//! replayed, in order, through [`topboard_core::BoundedTopStore::insert`].
//!
//! # Storage Backends
//!
//! All backends implement the [`SnapshotStore`] trait:
//!
//! - [`JsonFileSnapshot`] -- flat JSON file, replaced atomically on save
//! - [`InMemorySnapshot`] -- lock-protected `Vec` for tests and embedding

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{PersistError, PersistResult};
pub use file::JsonFileSnapshot;
pub use memory::InMemorySnapshot;
pub use traits::SnapshotStore;
