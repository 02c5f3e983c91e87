//! Reconciliation with the translation sheet.
//!
//! Translators work in a shared sheet with one row per POI: the `id`, the
//! source text of each translatable attribute and one `attribute:language`
//! column per language. Each run
//!
//! 1.  fetches the sheet (`store`),
//! 2.  drops rows of POIs whose source text changed or that disappeared
//!     (`reconcile::filter_rows`), so stale translations are never published,
//! 3.  merges the remaining non-blank cells into the POIs
//!     (`reconcile::merge_translations`),
//! 4.  writes a fresh template for every POI back to the sheet (`template`),
//!     keeping existing translations and leaving new cells empty.

pub mod reconcile;
pub mod store;
pub mod template;

pub use reconcile::{filter_rows, merge_translations};
pub use store::{CsvTranslationStore, TranslationStore};
pub use template::{rows_to_translate, template_header};
