//! Run outputs: the GeoJSON collections and the invalid-record report.
//!
//! All files are pretty JSON written atomically.

pub mod geojson;
pub mod grouping;

use crate::error::ImporterError;
use crate::services::files::{to_pretty_json, write_atomic};
use common::model::poi::Poi;
use common::model::record::InvalidRecord;
use log::info;
use std::path::Path;

pub use geojson::{feature_collection, Feature, FeatureCollection, Geometry};
pub use grouping::group_by_category;

/// Writes `pois` as a GeoJSON FeatureCollection and returns the number of
/// features written.
pub fn write_geojson<'a, I>(path: &Path, pois: I) -> Result<usize, ImporterError>
where
    I: IntoIterator<Item = &'a Poi>,
{
    let collection = feature_collection(pois)?;
    write_atomic(path, &to_pretty_json(&collection)?)?;
    info!(
        "Wrote {} features to {}",
        collection.features.len(),
        path.display()
    );
    Ok(collection.features.len())
}

/// Writes the audit report: a JSON array of `[errors, record]` pairs in
/// input order.
pub fn write_invalid_report(path: &Path, invalid: &[InvalidRecord]) -> Result<(), ImporterError> {
    write_atomic(path, &to_pretty_json(invalid)?)?;
    info!("Wrote {} invalid markers to {}", invalid.len(), path.display());
    Ok(())
}
