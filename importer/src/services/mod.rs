pub mod files;
pub mod markers;
pub mod output;
pub mod snapshot;
pub mod translation;
pub mod validation;
