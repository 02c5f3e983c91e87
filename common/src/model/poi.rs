use crate::model::category::Category;
use crate::model::field::Field;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A validated point of interest.
///
/// Only the validation pipeline constructs these; every value has passed its
/// field check. `localized` carries translated text merged in from the
/// translation store, keyed by column name (`name:en`, `description:uk`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    pub id: String,
    pub category: Category,
    pub verified: bool,
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub opening_hours: Option<String>,
    pub website: Option<String>,
    #[serde(flatten)]
    pub localized: BTreeMap<String, String>,
}

/// Outcome of writing one translation cell onto a POI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeUpdate {
    Applied,
    /// The column names the identifier or a typed attribute, which text
    /// cells never overwrite.
    Ignored,
}

impl Poi {
    /// Text value of a canonical text attribute or a localized column.
    pub fn text_attribute(&self, key: &str) -> Option<&str> {
        match key.parse::<Field>() {
            Ok(Field::Id) => Some(&self.id),
            Ok(Field::Name) => Some(&self.name),
            Ok(field) => self.optional_text(field),
            Err(_) => self.localized.get(key).map(String::as_str),
        }
    }

    /// Writes one text cell. Unknown keys land in `localized`; the
    /// identifier and typed attributes are left untouched.
    pub fn set_text_attribute(&mut self, key: &str, value: String) -> AttributeUpdate {
        match key.parse::<Field>() {
            Ok(field) if !field.is_text() => return AttributeUpdate::Ignored,
            Ok(Field::Name) => self.name = value,
            Ok(field) => {
                if let Some(slot) = self.optional_text_mut(field) {
                    *slot = Some(value);
                }
            }
            Err(_) => {
                self.localized.insert(key.to_string(), value);
            }
        }
        AttributeUpdate::Applied
    }

    fn optional_text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Description => self.description.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Address => self.address.as_deref(),
            Field::OpeningHours => self.opening_hours.as_deref(),
            Field::Website => self.website.as_deref(),
            _ => None,
        }
    }

    fn optional_text_mut(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::Description => Some(&mut self.description),
            Field::Phone => Some(&mut self.phone),
            Field::Address => Some(&mut self.address),
            Field::OpeningHours => Some(&mut self.opening_hours),
            Field::Website => Some(&mut self.website),
            _ => None,
        }
    }
}

/// POIs of the previous run keyed by identifier.
pub type Snapshot = BTreeMap<String, Poi>;
