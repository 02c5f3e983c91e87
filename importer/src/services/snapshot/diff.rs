use crate::services::snapshot::store::SnapshotStore;
use common::model::diff::Diff;
use common::model::poi::{Poi, Snapshot};
use log::{error, info, warn};
use std::collections::HashSet;

/// Attributes compared against the snapshot. Only these drive translation
/// work, so a change anywhere else does not mark a POI as modified.
pub fn comparison_fields_differ(current: &Poi, previous: &Poi) -> bool {
    current.name != previous.name || current.description != previous.description
}

/// Classifies the current POIs against the previous snapshot.
pub fn compute_diff(pois: &[Poi], snapshot: &Snapshot) -> Diff {
    let mut diff = Diff::default();
    for poi in pois {
        match snapshot.get(&poi.id) {
            None => {
                diff.created.insert(poi.id.clone(), poi.clone());
            }
            Some(previous) if comparison_fields_differ(poi, previous) => {
                diff.modified.insert(poi.id.clone(), poi.clone());
            }
            Some(_) => {}
        }
    }

    let current_ids: HashSet<&str> = pois.iter().map(|poi| poi.id.as_str()).collect();
    diff.deleted = snapshot
        .iter()
        .filter(|(id, _)| !current_ids.contains(id.as_str()))
        .map(|(id, poi)| (id.clone(), poi.clone()))
        .collect();
    diff
}

/// Snapshot describing the given POI set.
pub fn snapshot_of(pois: &[Poi]) -> Snapshot {
    pois.iter().map(|poi| (poi.id.clone(), poi.clone())).collect()
}

/// Change detection against a persisted snapshot.
pub struct DiffEngine<'a> {
    store: &'a dyn SnapshotStore,
}

impl<'a> DiffEngine<'a> {
    pub fn new(store: &'a dyn SnapshotStore) -> Self {
        Self { store }
    }

    /// Computes the diff and, when `update` is set, replaces the stored
    /// snapshot with the full current POI set.
    ///
    /// An unreadable snapshot counts as empty. A failed write is logged and
    /// leaves the previous snapshot in place; neither aborts the run.
    pub fn run(&self, pois: &[Poi], update: bool) -> Diff {
        let previous = self.store.load().unwrap_or_else(|err| {
            warn!("Snapshot unavailable, treating every POI as created: {err}");
            Snapshot::new()
        });

        let diff = compute_diff(pois, &previous);
        info!(
            "Diff: {} created, {} modified, {} deleted",
            diff.created.len(),
            diff.modified.len(),
            diff.deleted.len()
        );

        if update {
            if let Err(err) = self.store.save(&snapshot_of(pois)) {
                error!("Snapshot write failed, previous snapshot kept: {err}");
            }
        }
        diff
    }
}
