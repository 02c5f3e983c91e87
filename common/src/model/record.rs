use crate::model::field::Field;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Per-field failure reasons of one record, keyed by attribute.
pub type FieldErrors = BTreeMap<Field, String>;

/// A marker flattened onto the canonical attribute set, values still raw.
///
/// Missing attributes are `null`; deciding whether absence is acceptable is
/// the validator's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalRecord {
    pub id: Value,
    pub category: Value,
    pub verified: Value,
    pub lat: Value,
    pub lng: Value,
    pub name: Value,
    pub description: Value,
    pub phone: Value,
    pub address: Value,
    pub opening_hours: Value,
    pub website: Value,
}

impl CanonicalRecord {
    pub fn get(&self, field: Field) -> &Value {
        match field {
            Field::Id => &self.id,
            Field::Category => &self.category,
            Field::Verified => &self.verified,
            Field::Lat => &self.lat,
            Field::Lng => &self.lng,
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Phone => &self.phone,
            Field::Address => &self.address,
            Field::OpeningHours => &self.opening_hours,
            Field::Website => &self.website,
        }
    }

    pub fn set(&mut self, field: Field, value: Value) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Category => &mut self.category,
            Field::Verified => &mut self.verified,
            Field::Lat => &mut self.lat,
            Field::Lng => &mut self.lng,
            Field::Name => &mut self.name,
            Field::Description => &mut self.description,
            Field::Phone => &mut self.phone,
            Field::Address => &mut self.address,
            Field::OpeningHours => &mut self.opening_hours,
            Field::Website => &mut self.website,
        };
        *slot = value;
    }
}

/// A record rejected by validation, kept for the audit report.
///
/// Serialized as a two element array `[errors, record]`, the layout consumers
/// of the invalid report already read.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidRecord {
    pub errors: FieldErrors,
    pub record: CanonicalRecord,
}

impl Serialize for InvalidRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.errors, &self.record).serialize(serializer)
    }
}
