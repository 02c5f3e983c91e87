//! # Import run
//!
//! One synchronous pass over the marker data:
//!
//! 1.  **Fetch**: download the raw markers. Failure aborts the run.
//! 2.  **Assemble**: flatten markers onto the canonical attribute set.
//! 3.  **Validate**: split records into POIs and invalid records, then keep
//!     only verified POIs.
//! 4.  **Diff**: compare against the previous snapshot and (unless disabled)
//!     replace it with the current POIs.
//! 5.  **Translate**: fetch the translation sheet, drop rows made stale by the
//!     diff, merge the rest into the POIs and write the refreshed template.
//! 6.  **Emit**: GeoJSON (optionally one file per category) and the invalid
//!     report.

use crate::config::Config;
use crate::error::ImporterError;
use crate::job_controller::state::RunState;
use crate::services::markers::{self, FileMarkerSource, HttpMarkerSource, MarkerSource};
use crate::services::output::{self, group_by_category};
use crate::services::snapshot::{DiffEngine, JsonFileSnapshotStore, SnapshotStore};
use crate::services::translation::{self, CsvTranslationStore, TranslationStore};
use crate::services::validation;
use common::jobs::{RunStage, RunSummary};
use log::info;

/// External collaborators of a run.
pub struct Importer<'a> {
    pub markers: &'a dyn MarkerSource,
    pub snapshots: &'a dyn SnapshotStore,
    pub translations: &'a dyn TranslationStore,
}

impl Importer<'_> {
    /// Runs every stage, recording progress in `state`.
    pub fn run(&self, config: &Config, state: &mut RunState) -> Result<RunSummary, ImporterError> {
        match self.run_stages(config, state) {
            Ok(summary) => {
                state.complete(summary.clone());
                Ok(summary)
            }
            Err(err) => {
                state.fail(err.to_string());
                Err(err)
            }
        }
    }

    fn run_stages(
        &self,
        config: &Config,
        state: &mut RunState,
    ) -> Result<RunSummary, ImporterError> {
        let mut summary = RunSummary::default();

        state.advance(RunStage::Fetch);
        let raw_markers = self.markers.fetch()?;
        summary.markers = raw_markers.len();

        state.advance(RunStage::Assemble);
        let records = markers::assemble_all(raw_markers);

        state.advance(RunStage::Validate);
        let outcome = validation::validate_all(records);
        summary.valid = outcome.pois.len();
        summary.invalid = outcome.invalid.len();
        let mut pois = validation::verified_only(outcome.pois);
        summary.verified = pois.len();
        info!(
            "{} valid POIs ({} verified), {} invalid markers",
            summary.valid, summary.verified, summary.invalid
        );

        state.advance(RunStage::Diff);
        let diff = DiffEngine::new(self.snapshots).run(&pois, !config.no_snapshot_update);
        summary.created = diff.created.len();
        summary.modified = diff.modified.len();
        summary.deleted = diff.deleted.len();

        state.advance(RunStage::Translate);
        let rows = translation::filter_rows(self.translations.fetch()?, &diff);
        summary.translations_kept = rows.len();
        translation::merge_translations(&mut pois, &rows);
        let template =
            translation::rows_to_translate(&pois, &config.translate_attributes, &config.languages);
        self.translations.update(&template)?;
        summary.translations_written = template.len();

        state.advance(RunStage::Emit);
        output::write_geojson(&config.geojson_path, &pois)?;
        if config.per_category {
            for (category, members) in group_by_category(&pois) {
                output::write_geojson(&config.category_geojson_path(category), members)?;
            }
        }
        output::write_invalid_report(&config.invalid_report_path, &outcome.invalid)?;

        Ok(summary)
    }
}

/// Builds the file and HTTP collaborators described by `config` and runs.
pub fn run_with_config(config: &Config) -> Result<RunSummary, ImporterError> {
    let markers: Box<dyn MarkerSource> = match &config.markers_file {
        Some(path) => Box::new(FileMarkerSource::new(path)),
        None => Box::new(HttpMarkerSource::new(config.markers_url.clone())),
    };
    let snapshots = JsonFileSnapshotStore::new(&config.snapshot_path);
    let translations = CsvTranslationStore::new(
        &config.translations_path,
        translation::template_header(&config.translate_attributes, &config.languages),
    )
    .with_empty_value(config.empty_value.clone());

    let importer = Importer {
        markers: markers.as_ref(),
        snapshots: &snapshots,
        translations: &translations,
    };
    let mut state = RunState::new();
    info!("Starting import run {}", state.run_id);
    importer.run(config, &mut state)
}
