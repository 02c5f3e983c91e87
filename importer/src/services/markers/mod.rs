//! Marker intake: fetching the raw payload and flattening it onto the
//! canonical attribute set.
//!
//! - `source`: the `MarkerSource` seam with the HTTP endpoint and local JSON
//!   file implementations. A fetch failure is fatal for the run.
//! - `assemble`: maps the plugin's attribute names (and its nested custom
//!   field list) onto `CanonicalRecord`. Nothing is validated here; missing
//!   attributes simply stay `null`.

pub mod assemble;
pub mod source;

pub use assemble::{assemble, assemble_all};
pub use source::{FileMarkerSource, HttpMarkerSource, MarkerSource};
