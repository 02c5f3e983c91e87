//! Command line and environment configuration of an import run.

use clap::Parser;
use common::model::category::Category;
use common::model::field::Field;
use regex::Regex;
use std::path::PathBuf;

/// Marker endpoint of the production map (`map_id` 1; map 2 is the test map).
pub const DEFAULT_MARKERS_URL: &str = "https://pomag.am/index.php\
     ?rest_route=/wpgmza/v1/markers\
     &filter={\"map_id\":\"1\"}";

/// Settings of one import run.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "poi-importer",
    about = "Imports map markers, validates them and publishes GeoJSON with translations"
)]
pub struct Config {
    /// Marker endpoint returning a JSON array of markers.
    #[arg(long, env = "POI_MARKERS_URL", default_value = DEFAULT_MARKERS_URL)]
    pub markers_url: String,

    /// Read markers from a local JSON file instead of the endpoint.
    #[arg(long, env = "POI_MARKERS_FILE")]
    pub markers_file: Option<PathBuf>,

    /// POIs of the previous run, used to detect changes.
    #[arg(long = "snapshot", env = "POI_SNAPSHOT", default_value = ".pomagam_cache.json")]
    pub snapshot_path: PathBuf,

    /// Compute the diff without rewriting the snapshot.
    #[arg(long)]
    pub no_snapshot_update: bool,

    /// Translation sheet (CSV, first row holds the headers).
    #[arg(long = "translations", env = "POI_TRANSLATIONS", default_value = "translations.csv")]
    pub translations_path: PathBuf,

    /// Attributes sent out for translation.
    #[arg(
        long = "translate",
        env = "POI_TRANSLATE",
        value_delimiter = ',',
        default_value = "name",
        value_parser = parse_translatable
    )]
    pub translate_attributes: Vec<Field>,

    /// Language codes of the translation columns.
    #[arg(
        long,
        env = "POI_LANGUAGES",
        value_delimiter = ',',
        default_value = "pl,en,ua,ru",
        value_parser = parse_language
    )]
    pub languages: Vec<String>,

    /// Cell value written for columns a row has no value for.
    #[arg(long, env = "POI_EMPTY_VALUE", default_value = "")]
    pub empty_value: String,

    /// GeoJSON output with every verified POI.
    #[arg(long = "geojson", env = "POI_GEOJSON", default_value = "pomagam.geojson")]
    pub geojson_path: PathBuf,

    /// Also write one GeoJSON file per category next to the main output.
    #[arg(long)]
    pub per_category: bool,

    /// Audit report of rejected markers.
    #[arg(
        long = "invalid-report",
        env = "POI_INVALID_REPORT",
        default_value = "pomagam_invalid.json"
    )]
    pub invalid_report_path: PathBuf,
}

impl Config {
    /// `<dir>/<stem>-<category>.geojson` for the main GeoJSON path.
    pub fn category_geojson_path(&self, category: Category) -> PathBuf {
        let stem = self
            .geojson_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("pois");
        self.geojson_path
            .with_file_name(format!("{stem}-{}.geojson", category.name()))
    }
}

fn parse_translatable(value: &str) -> Result<Field, String> {
    let field = value.trim().parse::<Field>()?;
    if field.is_translatable() {
        Ok(field)
    } else {
        Err(format!("attribute '{field}' is not translatable"))
    }
}

/// Language codes become column suffixes, so only short lowercase codes pass.
fn parse_language(value: &str) -> Result<String, String> {
    let pattern = Regex::new(r"^[a-z]{2,3}$").map_err(|e| format!("Regex error: {}", e))?;
    let code = value.trim();
    if pattern.is_match(code) {
        Ok(code.to_string())
    } else {
        Err(format!("invalid language code '{code}'"))
    }
}
