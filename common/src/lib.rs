//! Types shared by the importer stages: the raw marker payload, the
//! canonical record, validated POIs, diffs, translation rows and run status.

pub mod jobs;
pub mod model;
