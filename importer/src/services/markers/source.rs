use crate::error::ImporterError;
use common::model::marker::RawMarker;
use log::info;
use std::fs;
use std::path::PathBuf;

/// Supplier of the raw marker list for one run.
pub trait MarkerSource {
    fn fetch(&self) -> Result<Vec<RawMarker>, ImporterError>;
}

/// Markers published by the map plugin's REST endpoint.
pub struct HttpMarkerSource {
    url: String,
}

impl HttpMarkerSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl MarkerSource for HttpMarkerSource {
    fn fetch(&self) -> Result<Vec<RawMarker>, ImporterError> {
        info!("Downloading markers from {}", self.url);
        let resp = reqwest::blocking::get(&self.url)?;
        if !resp.status().is_success() {
            return Err(ImporterError::UpstreamStatus(resp.status().as_u16()));
        }
        let markers: Vec<RawMarker> = resp.json()?;
        info!("Downloaded {} markers", markers.len());
        Ok(markers)
    }
}

/// Markers stored as the same JSON array on disk.
pub struct FileMarkerSource {
    path: PathBuf,
}

impl FileMarkerSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MarkerSource for FileMarkerSource {
    fn fetch(&self) -> Result<Vec<RawMarker>, ImporterError> {
        info!("Reading markers from {}", self.path.display());
        let bytes = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_source_decodes_marker_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markers.json");
        fs::write(
            &path,
            json!([{"id": 1, "categories": ["2"], "title": "Nocleg"}]).to_string(),
        )
        .unwrap();

        let markers = FileMarkerSource::new(&path).fetch().unwrap();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].categories, json!(["2"]));
    }

    #[test]
    fn file_source_rejects_non_array_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markers.json");
        fs::write(&path, "{\"error\": true}").unwrap();

        let err = FileMarkerSource::new(&path).fetch().unwrap_err();
        assert!(matches!(err, ImporterError::Json(_)), "unexpected: {err}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FileMarkerSource::new("/definitely/not/here.json")
            .fetch()
            .unwrap_err();
        assert!(matches!(err, ImporterError::Io(_)));
    }
}
