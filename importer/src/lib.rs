//! Marker importer for the help-point map.
//!
//! Pulls the markers of the map plugin, validates them into points of
//! interest, tracks changes between runs, keeps the translation sheet in
//! sync and publishes the result as GeoJSON.

pub mod config;
pub mod error;
pub mod job_controller;
pub mod pipeline;
pub mod services;

pub use config::Config;
pub use error::ImporterError;
pub use pipeline::{run_with_config, Importer};
