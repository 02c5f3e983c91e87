use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed category enumeration published by the marker source.
///
/// The upstream map identifies categories by numeric string codes; the
/// importer emits the camel-case names below. The names are part of the
/// output contract (including the historical `govermentCharity` spelling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "charityDropOff")]
    CharityDropOff,
    #[serde(rename = "accommodation")]
    Accommodation,
    #[serde(rename = "govermentCharity")]
    GovernmentCharity,
    #[serde(rename = "psychologicalAssistance")]
    PsychologicalAssistance,
    #[serde(rename = "legalAssistance")]
    LegalAssistance,
    #[serde(rename = "medicalAssistance")]
    MedicalAssistance,
    #[serde(rename = "animalAssistance")]
    AnimalAssistance,
    #[serde(rename = "childcare")]
    Childcare,
    #[serde(rename = "transport")]
    Transport,
}

impl Category {
    /// Every category, ordered by upstream code.
    pub const ALL: [Category; 9] = [
        Category::CharityDropOff,
        Category::Accommodation,
        Category::GovernmentCharity,
        Category::PsychologicalAssistance,
        Category::LegalAssistance,
        Category::MedicalAssistance,
        Category::AnimalAssistance,
        Category::Childcare,
        Category::Transport,
    ];

    /// Category assigned to markers published without any category code.
    pub const DEFAULT: Category = Category::CharityDropOff;

    pub const fn code(self) -> &'static str {
        match self {
            Category::CharityDropOff => "1",
            Category::Accommodation => "2",
            Category::GovernmentCharity => "3",
            Category::PsychologicalAssistance => "4",
            Category::LegalAssistance => "5",
            Category::MedicalAssistance => "6",
            Category::AnimalAssistance => "7",
            Category::Childcare => "8",
            Category::Transport => "9",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::CharityDropOff => "charityDropOff",
            Category::Accommodation => "accommodation",
            Category::GovernmentCharity => "govermentCharity",
            Category::PsychologicalAssistance => "psychologicalAssistance",
            Category::LegalAssistance => "legalAssistance",
            Category::MedicalAssistance => "medicalAssistance",
            Category::AnimalAssistance => "animalAssistance",
            Category::Childcare => "childcare",
            Category::Transport => "transport",
        }
    }

    pub fn from_code(code: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_fixed_names() {
        let expected = [
            ("1", "charityDropOff"),
            ("2", "accommodation"),
            ("3", "govermentCharity"),
            ("4", "psychologicalAssistance"),
            ("5", "legalAssistance"),
            ("6", "medicalAssistance"),
            ("7", "animalAssistance"),
            ("8", "childcare"),
            ("9", "transport"),
        ];
        for (code, name) in expected {
            let category = Category::from_code(code).unwrap();
            assert_eq!(category.name(), name);
            assert_eq!(serde_json::to_value(category).unwrap(), name);
        }
        assert_eq!(Category::from_code("10"), None);
        assert_eq!(Category::from_code(""), None);
    }
}
