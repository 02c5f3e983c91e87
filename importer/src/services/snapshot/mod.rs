//! Change detection between runs.
//!
//! The previous run's POIs are kept in a snapshot keyed by identifier. Each
//! run compares its verified POIs to that snapshot (`diff`) and then replaces
//! the snapshot with the current set (`store`). Snapshot problems never abort
//! a run: a missing or corrupt file reads as empty, a failed write keeps the
//! old file.

pub mod diff;
pub mod store;

pub use diff::{compute_diff, snapshot_of, DiffEngine};
pub use store::{JsonFileSnapshotStore, SnapshotStore};
