//! Field validation of canonical records.
//!
//! Every canonical attribute has its own parser, selected by matching on
//! `Field`. Parsers never panic on upstream input: each returns either the
//! typed value or a `FieldError` with a readable reason. The pipeline runs all
//! parsers on every record so the invalid report lists every problem of a
//! marker at once, not only the first.
//!
//! - `fields`: the per-attribute parsers, bounds and vocabularies.
//! - `html`: HTML to text conversion used by the text parsers.
//! - `pipeline`: batch validation into POIs and invalid records.

pub mod fields;
pub mod html;
pub mod pipeline;

pub use fields::{validate, FieldError, FieldValue};
pub use pipeline::{validate_all, validate_record, verified_only, ValidationOutcome};
