use crate::services::validation::html::{description_to_text, sanitize};
use common::model::category::Category;
use common::model::field::Field;
use serde_json::Value;
use thiserror::Error;

/// Open latitude interval accepted for the covered area.
pub const LAT_BOUNDS: (f64, f64) = (45.0, 56.0);
/// Open longitude interval accepted for the covered area.
pub const LNG_BOUNDS: (f64, f64) = (12.0, 30.0);

/// Spellings of the verification custom field meaning "verified", after
/// whitespace removal and lower-casing.
pub const VERIFIED_TRUE: [&str; 5] = [
    "tak",
    "zweryfikowany",
    "zweryfikowane",
    "zweryfikowana",
    "zweryfikowano",
];
/// Spellings meaning "not verified".
pub const VERIFIED_FALSE: [&str; 5] = [
    "nie",
    "niezweryfikowany",
    "niezweryfikowana",
    "niezweryfikowane",
    "niezweryfikowano",
];

/// Rejection of one attribute; `reason` is the message shown in the
/// invalid report.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct FieldError {
    pub field: Field,
    pub reason: String,
}

impl FieldError {
    fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// A successfully validated attribute, tagged with the attribute it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Id(String),
    Category(Category),
    Verified(bool),
    Lat(f64),
    Lng(f64),
    Name(String),
    Description(Option<String>),
    Phone(Option<String>),
    Address(Option<String>),
    OpeningHours(Option<String>),
    Website(Option<String>),
}

/// Validates one raw attribute value.
pub fn validate(field: Field, raw: &Value) -> Result<FieldValue, FieldError> {
    let err = |reason: String| FieldError::new(field, reason);
    match field {
        Field::Id => parse_id(raw).map(FieldValue::Id).map_err(err),
        Field::Category => parse_category(raw).map(FieldValue::Category).map_err(err),
        Field::Verified => parse_verified(raw).map(FieldValue::Verified).map_err(err),
        Field::Lat => parse_coordinate(raw, "latitude", LAT_BOUNDS)
            .map(FieldValue::Lat)
            .map_err(err),
        Field::Lng => parse_coordinate(raw, "longitude", LNG_BOUNDS)
            .map(FieldValue::Lng)
            .map_err(err),
        Field::Name => parse_name(raw).map(FieldValue::Name).map_err(err),
        Field::Description => Ok(FieldValue::Description(parse_description(raw))),
        Field::Phone => Ok(FieldValue::Phone(parse_loose_text(raw))),
        Field::Address => Ok(FieldValue::Address(parse_loose_text(raw))),
        Field::OpeningHours => Ok(FieldValue::OpeningHours(parse_loose_text(raw))),
        Field::Website => Ok(FieldValue::Website(parse_website(raw))),
    }
}

/// Truthiness of an upstream value: `null`, `false`, zero and empty
/// strings, lists and objects count as absent.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Text form of a value: strings unquoted, anything else as JSON.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Any non-empty value, kept as its text form.
fn parse_id(raw: &Value) -> Result<String, String> {
    if is_falsy(raw) {
        return Err("ID cannot be empty!".to_string());
    }
    Ok(stringify(raw))
}

/// A list holding at most one category code; the empty list means the
/// default category.
fn parse_category(raw: &Value) -> Result<Category, String> {
    let Value::Array(codes) = raw else {
        return Err(format!("Unexpected category data type: {raw}"));
    };
    match codes.as_slice() {
        [] => Ok(Category::DEFAULT),
        [code] => code
            .as_str()
            .and_then(Category::from_code)
            .ok_or_else(|| format!("Unexpected category ID: {}", stringify(code))),
        _ => Err(format!("Unexpected multiple categories: {raw}")),
    }
}

/// Absent means unverified; otherwise the text must be one of the known
/// spellings, compared without whitespace and case.
fn parse_verified(raw: &Value) -> Result<bool, String> {
    if is_falsy(raw) {
        return Ok(false);
    }
    let Value::String(text) = raw else {
        return Err(format!("Unexpected verified value: {raw}"));
    };
    let clean: String = text.split_whitespace().collect::<String>().to_lowercase();
    if VERIFIED_TRUE.contains(&clean.as_str()) {
        Ok(true)
    } else if VERIFIED_FALSE.contains(&clean.as_str()) {
        Ok(false)
    } else {
        Err(format!("Unexpected verified value: {text}"))
    }
}

/// A number, or a numeric string, strictly inside `min..max`.
fn parse_coordinate(raw: &Value, label: &str, (min, max): (f64, f64)) -> Result<f64, String> {
    let number = match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| format!("Invalid {label}: {raw}"))?;

    if min < number && number < max {
        Ok(number)
    } else {
        Err(format!("Suspicious {label}: {number:?}"))
    }
}

/// Required text with markup removed.
fn parse_name(raw: &Value) -> Result<String, String> {
    if is_falsy(raw) {
        return Err("Name cannot be empty!".to_string());
    }
    Ok(sanitize(&stringify(raw)))
}

/// Editor HTML converted to plain text. The conversion already decodes
/// entities, so its output is not parsed again.
fn parse_description(raw: &Value) -> Option<String> {
    if is_falsy(raw) {
        return None;
    }
    Some(description_to_text(&stringify(raw)))
}

/// Optional text with markup removed.
fn parse_loose_text(raw: &Value) -> Option<String> {
    if is_falsy(raw) {
        return None;
    }
    Some(sanitize(&stringify(raw)))
}

/// Optional link, kept verbatim.
fn parse_website(raw: &Value) -> Option<String> {
    if is_falsy(raw) {
        return None;
    }
    Some(stringify(raw))
}
