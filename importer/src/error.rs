use std::io;

use thiserror::Error;

/// Failures that abort an import run.
///
/// Field validation failures and snapshot problems are not represented here
/// as run outcomes: the former are routed to the invalid report, the latter
/// degrade inside the diff stage.
#[derive(Debug, Error)]
pub enum ImporterError {
    #[error("marker source request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("marker source answered with HTTP status {0}")]
    UpstreamStatus(u16),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("translation store failure: {0}")]
    TranslationStore(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}
