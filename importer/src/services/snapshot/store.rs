use crate::error::ImporterError;
use crate::services::files::{to_pretty_json, write_atomic};
use common::model::poi::Snapshot;
use std::fs;
use std::path::PathBuf;

/// Persistence of the POI set between runs.
pub trait SnapshotStore {
    fn load(&self) -> Result<Snapshot, ImporterError>;
    /// Replaces the stored snapshot as a whole.
    fn save(&self, snapshot: &Snapshot) -> Result<(), ImporterError>;
}

/// Snapshot kept as a JSON object (`id -> POI`) in a local file.
pub struct JsonFileSnapshotStore {
    path: PathBuf,
}

impl JsonFileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonFileSnapshotStore {
    fn load(&self) -> Result<Snapshot, ImporterError> {
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<(), ImporterError> {
        let bytes = to_pretty_json(snapshot)?;
        write_atomic(&self.path, &bytes)?;
        Ok(())
    }
}
