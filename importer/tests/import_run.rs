use clap::Parser;
use common::jobs::{RunStage, RunStatus};
use importer::job_controller::state::RunState;
use importer::services::markers::FileMarkerSource;
use importer::services::snapshot::JsonFileSnapshotStore;
use importer::services::translation::{template_header, CsvTranslationStore};
use importer::{run_with_config, Config, Importer};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write_markers(&self, markers: Value) {
        fs::write(self.path("markers.json"), markers.to_string()).unwrap();
    }

    fn config(&self, extra: &[&str]) -> Config {
        let mut args: Vec<String> = vec!["poi-importer".to_string()];
        for (flag, file) in [
            ("--markers-file", "markers.json"),
            ("--snapshot", "cache.json"),
            ("--translations", "translations.csv"),
            ("--geojson", "pois.geojson"),
            ("--invalid-report", "invalid.json"),
        ] {
            args.push(flag.to_string());
            args.push(self.path(file).display().to_string());
        }
        args.extend(extra.iter().map(|arg| arg.to_string()));
        Config::parse_from(args)
    }

    fn json(&self, name: &str) -> Value {
        read_json(&self.path(name))
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_slice(&fs::read(path).unwrap()).unwrap()
}

fn verified(value: &str) -> Value {
    json!([{"name": "Czy zweryfikowany?", "value": value}])
}

fn pharmacy(title: &str) -> Value {
    json!({
        "id": "1",
        "categories": ["6"],
        "category": "3",
        "title": title,
        "lat": "52.0",
        "lng": "21.0",
        "address": "ul. Prosta 1",
        "custom_field_data": verified("Tak"),
    })
}

fn standard_markers() -> Value {
    json!([
        pharmacy("Apteka"),
        {
            "id": "2",
            "categories": ["6"],
            "title": "Za daleko",
            "lat": "90",
            "lng": "21",
            "custom_field_data": verified("Tak"),
        },
        {
            "id": "3",
            "categories": ["9"],
            "title": "Bus",
            "lat": "50.1",
            "lng": "19.9",
            "custom_field_data": verified("nie zweryfikowany"),
        }
    ])
}

#[test]
fn first_run_publishes_verified_pois_and_reports_invalid_ones() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());

    let summary = run_with_config(&ws.config(&[])).unwrap();
    assert_eq!(summary.markers, 3);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.verified, 1);
    assert_eq!(summary.created, 1);
    assert_eq!(summary.modified, 0);
    assert_eq!(summary.deleted, 0);
    assert_eq!(summary.translations_written, 1);

    let geojson = ws.json("pois.geojson");
    assert_eq!(geojson["type"], "FeatureCollection");
    let features = geojson["features"].as_array().unwrap();
    assert_eq!(features.len(), 1);
    assert_eq!(features[0]["geometry"]["coordinates"], json!([21.0, 52.0]));
    let properties = &features[0]["properties"];
    assert_eq!(properties["id"], "1");
    assert_eq!(properties["category"], "medicalAssistance");
    assert_eq!(properties["verified"], true);
    assert_eq!(properties["name"], "Apteka");
    assert!(properties.get("lat").is_none());

    let invalid = ws.json("invalid.json");
    let invalid = invalid.as_array().unwrap();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0][0], json!({"lat": "Suspicious latitude: 90.0"}));
    assert_eq!(invalid[0][1]["id"], "2");

    let sheet = fs::read_to_string(ws.path("translations.csv")).unwrap();
    assert_eq!(
        sheet,
        "id,name,name:pl,name:en,name:ua,name:ru\n1,Apteka,,,,\n"
    );
}

#[test]
fn second_run_over_same_input_sees_no_changes() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());

    run_with_config(&ws.config(&[])).unwrap();
    let first_snapshot = ws.json("cache.json");
    let summary = run_with_config(&ws.config(&[])).unwrap();

    assert_eq!(
        (summary.created, summary.modified, summary.deleted),
        (0, 0, 0)
    );
    assert_eq!(ws.json("cache.json"), first_snapshot);
    assert_eq!(first_snapshot["1"]["name"], "Apteka");
    assert!(first_snapshot.get("3").is_none());
}

#[test]
fn translations_survive_until_the_source_text_changes() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());
    run_with_config(&ws.config(&[])).unwrap();

    fs::write(
        ws.path("translations.csv"),
        "id,name,name:pl,name:en,name:ua,name:ru\n1,Apteka,,Pharmacy,,\n",
    )
    .unwrap();

    let summary = run_with_config(&ws.config(&[])).unwrap();
    assert_eq!(summary.translations_kept, 1);
    let geojson = ws.json("pois.geojson");
    let properties = &geojson["features"][0]["properties"];
    assert_eq!(properties["name:en"], "Pharmacy");
    assert_eq!(properties["name"], "Apteka");
    let sheet = fs::read_to_string(ws.path("translations.csv")).unwrap();
    assert!(sheet.contains("1,Apteka,,Pharmacy,,"));

    ws.write_markers(json!([pharmacy("Apteka Nowa")]));
    let summary = run_with_config(&ws.config(&[])).unwrap();
    assert_eq!(summary.modified, 1);
    assert_eq!(summary.translations_kept, 0);
    let geojson = ws.json("pois.geojson");
    let properties = &geojson["features"][0]["properties"];
    assert_eq!(properties["name"], "Apteka Nowa");
    assert!(properties.get("name:en").is_none());
    let sheet = fs::read_to_string(ws.path("translations.csv")).unwrap();
    assert!(sheet.contains("1,Apteka Nowa,,,,"));
}

#[test]
fn blank_translation_cells_never_erase_text() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());
    run_with_config(&ws.config(&[])).unwrap();

    fs::write(
        ws.path("translations.csv"),
        "id,name,name:pl,name:en,name:ua,name:ru\n1,,,Pharmacy,,\n",
    )
    .unwrap();
    run_with_config(&ws.config(&[])).unwrap();

    let geojson = ws.json("pois.geojson");
    let properties = &geojson["features"][0]["properties"];
    assert_eq!(properties["name"], "Apteka");
    assert_eq!(properties["name:en"], "Pharmacy");
    assert!(properties.get("name:pl").is_none());
}

#[test]
fn removed_markers_are_reported_as_deleted() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());
    run_with_config(&ws.config(&[])).unwrap();

    ws.write_markers(json!([]));
    let summary = run_with_config(&ws.config(&[])).unwrap();
    assert_eq!(summary.deleted, 1);
    assert_eq!(ws.json("cache.json"), json!({}));
    assert_eq!(ws.json("pois.geojson")["features"], json!([]));
}

#[test]
fn corrupt_snapshot_counts_as_empty_and_is_replaced() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());
    fs::write(ws.path("cache.json"), "{not json").unwrap();

    let summary = run_with_config(&ws.config(&[])).unwrap();
    assert_eq!(summary.created, 1);
    assert_eq!(ws.json("cache.json")["1"]["id"], "1");
}

#[test]
fn snapshot_is_left_alone_when_updates_are_disabled() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());

    let summary = run_with_config(&ws.config(&["--no-snapshot-update"])).unwrap();
    assert_eq!(summary.created, 1);
    assert!(!ws.path("cache.json").exists());
}

#[test]
fn per_category_files_cover_every_category() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());

    run_with_config(&ws.config(&["--per-category"])).unwrap();

    let medical = ws.json("pois-medicalAssistance.geojson");
    assert_eq!(medical["features"].as_array().unwrap().len(), 1);
    let transport = ws.json("pois-transport.geojson");
    assert_eq!(transport["features"], json!([]));
    assert!(ws.path("pois-govermentCharity.geojson").exists());
}

#[test]
fn run_state_records_every_stage() {
    let ws = Workspace::new();
    ws.write_markers(standard_markers());
    let config = ws.config(&[]);

    let markers = FileMarkerSource::new(ws.path("markers.json"));
    let snapshots = JsonFileSnapshotStore::new(ws.path("cache.json"));
    let translations = CsvTranslationStore::new(
        ws.path("translations.csv"),
        template_header(&config.translate_attributes, &config.languages),
    );
    let importer = Importer {
        markers: &markers,
        snapshots: &snapshots,
        translations: &translations,
    };

    let mut state = RunState::new();
    let summary = importer.run(&config, &mut state).unwrap();

    let stages: Vec<RunStage> = state
        .history()
        .iter()
        .filter_map(|status| match status {
            RunStatus::InProgress(stage) => Some(*stage),
            _ => None,
        })
        .collect();
    assert_eq!(
        stages,
        vec![
            RunStage::Fetch,
            RunStage::Assemble,
            RunStage::Validate,
            RunStage::Diff,
            RunStage::Translate,
            RunStage::Emit,
        ]
    );
    assert_eq!(state.status(), &RunStatus::Completed(summary));
}

#[test]
fn unreadable_marker_source_aborts_the_run() {
    let ws = Workspace::new();
    let config = ws.config(&[]);

    let markers = FileMarkerSource::new(ws.path("missing.json"));
    let snapshots = JsonFileSnapshotStore::new(ws.path("cache.json"));
    let translations = CsvTranslationStore::new(ws.path("translations.csv"), vec!["id".into()]);
    let importer = Importer {
        markers: &markers,
        snapshots: &snapshots,
        translations: &translations,
    };

    let mut state = RunState::new();
    assert!(importer.run(&config, &mut state).is_err());
    assert!(matches!(state.status(), RunStatus::Failed(_)));
    assert!(!ws.path("pois.geojson").exists());
    assert!(!ws.path("cache.json").exists());
}
