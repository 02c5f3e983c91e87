use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A marker exactly as the map plugin publishes it.
///
/// The upstream payload has no schema version, so every attribute is kept as
/// an untyped JSON value and defaults to `null` when absent. Interpretation is
/// left to the assembler and the field validator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMarker {
    #[serde(default)]
    pub id: Value,
    /// List of category codes. This is the reliable category attribute.
    #[serde(default)]
    pub categories: Value,
    /// Single category attribute emitted next to `categories`. It does not
    /// always agree with `categories` and is never read by the importer.
    #[serde(default)]
    pub category: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub address: Value,
    #[serde(default)]
    pub lat: Value,
    #[serde(default)]
    pub lng: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub link: Value,
    /// Operator-defined `{name, value}` pairs (verification status, phone,
    /// opening hours). A `null` list is treated as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub custom_field_data: Vec<CustomField>,
}

/// One entry of `custom_field_data`, addressed by its display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Value,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<CustomField>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<CustomField>>::deserialize(deserializer)?.unwrap_or_default())
}
