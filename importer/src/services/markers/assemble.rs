use common::model::field::Field;
use common::model::marker::{CustomField, RawMarker};
use common::model::record::CanonicalRecord;
use serde_json::Value;
use std::collections::HashMap;

/// Custom field display names (as configured in the map plugin) and the
/// canonical attribute each one feeds.
pub const CUSTOM_FIELDS: [(&str, Field); 3] = [
    ("Czy zweryfikowany?", Field::Verified),
    ("Numer telefonu", Field::Phone),
    ("Godziny otwarcia", Field::OpeningHours),
];

fn custom_fields_by_name(fields: Vec<CustomField>) -> HashMap<String, Value> {
    // a repeated name keeps its last value
    fields
        .into_iter()
        .map(|field| (field.name, field.value))
        .collect()
}

/// Flattens one raw marker onto the canonical attribute set.
///
/// `categories` (a list) becomes `category`; the marker's own `category`
/// attribute is unreliable upstream and is dropped.
pub fn assemble(marker: RawMarker) -> CanonicalRecord {
    let mut record = CanonicalRecord {
        id: marker.id,
        category: marker.categories,
        name: marker.title,
        address: marker.address,
        lat: marker.lat,
        lng: marker.lng,
        description: marker.description,
        website: marker.link,
        ..CanonicalRecord::default()
    };

    let mut custom = custom_fields_by_name(marker.custom_field_data);
    for (display_name, field) in CUSTOM_FIELDS {
        record.set(field, custom.remove(display_name).unwrap_or(Value::Null));
    }
    record
}

/// Assembles a batch, keeping the input order.
pub fn assemble_all(markers: Vec<RawMarker>) -> Vec<CanonicalRecord> {
    markers.into_iter().map(assemble).collect()
}
