use crate::services::validation::fields::{validate, FieldValue};
use common::model::category::Category;
use common::model::field::Field;
use common::model::poi::Poi;
use common::model::record::{CanonicalRecord, FieldErrors, InvalidRecord};
use log::debug;
use std::collections::{BTreeMap, HashSet};

/// Result of validating a batch of canonical records, both lists in input
/// order.
#[derive(Debug, Default)]
pub struct ValidationOutcome {
    pub pois: Vec<Poi>,
    pub invalid: Vec<InvalidRecord>,
}

/// Validated values collected for one record before the POI is built.
#[derive(Default)]
struct PoiDraft {
    id: Option<String>,
    category: Option<Category>,
    verified: Option<bool>,
    lat: Option<f64>,
    lng: Option<f64>,
    name: Option<String>,
    description: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    opening_hours: Option<String>,
    website: Option<String>,
}

impl PoiDraft {
    fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::Id(v) => self.id = Some(v),
            FieldValue::Category(v) => self.category = Some(v),
            FieldValue::Verified(v) => self.verified = Some(v),
            FieldValue::Lat(v) => self.lat = Some(v),
            FieldValue::Lng(v) => self.lng = Some(v),
            FieldValue::Name(v) => self.name = Some(v),
            FieldValue::Description(v) => self.description = v,
            FieldValue::Phone(v) => self.phone = v,
            FieldValue::Address(v) => self.address = v,
            FieldValue::OpeningHours(v) => self.opening_hours = v,
            FieldValue::Website(v) => self.website = v,
        }
    }

    /// Builds the POI, or names the first required attribute never set.
    fn finish(self) -> Result<Poi, Field> {
        Ok(Poi {
            id: self.id.ok_or(Field::Id)?,
            category: self.category.ok_or(Field::Category)?,
            verified: self.verified.ok_or(Field::Verified)?,
            lat: self.lat.ok_or(Field::Lat)?,
            lng: self.lng.ok_or(Field::Lng)?,
            name: self.name.ok_or(Field::Name)?,
            description: self.description,
            phone: self.phone,
            address: self.address,
            opening_hours: self.opening_hours,
            website: self.website,
            localized: BTreeMap::new(),
        })
    }
}

/// Validates every field of a record independently.
///
/// Returns the POI, or the complete error map when any field failed.
pub fn validate_record(record: &CanonicalRecord) -> Result<Poi, FieldErrors> {
    let mut draft = PoiDraft::default();
    let mut errors = FieldErrors::new();

    for field in Field::ALL {
        match validate(field, record.get(field)) {
            Ok(value) => draft.apply(value),
            Err(err) => {
                errors.insert(err.field, err.reason);
            }
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }
    draft.finish().map_err(|field| {
        FieldErrors::from([(field, format!("Missing {field} value"))])
    })
}

/// Splits records into POIs and rejected records.
///
/// Identifiers are unique among verified POIs: a verified record repeating
/// the identifier of an earlier verified POI is rejected with an `id` error.
/// Unverified POIs never claim an identifier, since they are not published.
pub fn validate_all(records: Vec<CanonicalRecord>) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    let mut published_ids: HashSet<String> = HashSet::new();

    for record in records {
        let errors = match validate_record(&record) {
            Ok(poi) if !poi.verified || published_ids.insert(poi.id.clone()) => {
                outcome.pois.push(poi);
                continue;
            }
            Ok(poi) => FieldErrors::from([(Field::Id, format!("Duplicate ID: {}", poi.id))]),
            Err(errors) => errors,
        };
        debug!("Invalid marker {}: {:?}", record.id, errors);
        outcome.invalid.push(InvalidRecord { errors, record });
    }
    outcome
}

/// POIs confirmed by the curation team; only these are published.
pub fn verified_only(pois: Vec<Poi>) -> Vec<Poi> {
    pois.into_iter().filter(|poi| poi.verified).collect()
}
