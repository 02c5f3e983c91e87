use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical attribute of a point of interest.
///
/// Every stage of the importer addresses record attributes through this tag
/// instead of string keys: the assembler fills one slot per variant, the
/// validator dispatches on it, and the invalid-record report uses it as the
/// key of the per-field error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Category,
    Verified,
    Lat,
    Lng,
    Name,
    Description,
    Phone,
    Address,
    OpeningHours,
    Website,
}

impl Field {
    /// All attributes, in the order they are validated and reported.
    pub const ALL: [Field; 11] = [
        Field::Id,
        Field::Category,
        Field::Verified,
        Field::Lat,
        Field::Lng,
        Field::Name,
        Field::Description,
        Field::Phone,
        Field::Address,
        Field::OpeningHours,
        Field::Website,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Category => "category",
            Field::Verified => "verified",
            Field::Lat => "lat",
            Field::Lng => "lng",
            Field::Name => "name",
            Field::Description => "description",
            Field::Phone => "phone",
            Field::Address => "address",
            Field::OpeningHours => "opening_hours",
            Field::Website => "website",
        }
    }

    /// Attributes whose text is sent out for translation.
    pub const fn is_translatable(self) -> bool {
        matches!(self, Field::Name | Field::Description)
    }

    /// Attributes stored as free text on a [`crate::model::poi::Poi`].
    pub const fn is_text(self) -> bool {
        matches!(
            self,
            Field::Name
                | Field::Description
                | Field::Phone
                | Field::Address
                | Field::OpeningHours
                | Field::Website
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("unknown attribute '{s}'"))
    }
}
