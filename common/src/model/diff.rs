use crate::model::poi::Poi;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Change set between the previous snapshot and the current run.
///
/// `created` and `modified` hold the current POIs, `deleted` holds the
/// snapshot entries whose identifiers disappeared upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diff {
    pub created: BTreeMap<String, Poi>,
    pub modified: BTreeMap<String, Poi>,
    pub deleted: BTreeMap<String, Poi>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.modified.is_empty() && self.deleted.is_empty()
    }

    /// Identifiers whose translated text can no longer be trusted: the
    /// source text changed or the POI is gone.
    pub fn stale_ids(&self) -> BTreeSet<&str> {
        self.modified
            .keys()
            .chain(self.deleted.keys())
            .map(String::as_str)
            .collect()
    }
}
