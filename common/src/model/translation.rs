use crate::model::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Name of the identifier column in the translation sheet.
pub const ID_COLUMN: &str = "id";

/// Separator between attribute and language in a translation column name.
pub const LANGUAGE_SEPARATOR: char = ':';

/// One row of the translation sheet.
///
/// Every cell is kept as text, exactly as the translators typed it. The
/// identifier column is lifted into `id`; `cells` holds the remaining columns
/// keyed by header (`name`, `name:en`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRow {
    pub id: String,
    pub cells: BTreeMap<String, String>,
}

impl TranslationRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn with_cell(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.cells.insert(header.into(), value.into());
        self
    }

    /// Cell value for a header, the identifier column included.
    pub fn get(&self, header: &str) -> Option<&str> {
        if header == ID_COLUMN {
            Some(&self.id)
        } else {
            self.cells.get(header).map(String::as_str)
        }
    }

    /// Copy of the row without blank cells, so merging it never erases text.
    pub fn without_empty_cells(&self) -> TranslationRow {
        TranslationRow {
            id: self.id.clone(),
            cells: self
                .cells
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(header, value)| (header.clone(), value.clone()))
                .collect(),
        }
    }
}

/// A per-language translation column such as `name:pl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationColumn {
    pub attribute: Field,
    pub language: String,
}

impl TranslationColumn {
    pub fn new(attribute: Field, language: impl Into<String>) -> Self {
        Self {
            attribute,
            language: language.into(),
        }
    }
}

impl fmt::Display for TranslationColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.attribute, LANGUAGE_SEPARATOR, self.language)
    }
}
