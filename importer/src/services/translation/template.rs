use common::model::field::Field;
use common::model::poi::Poi;
use common::model::translation::{TranslationColumn, TranslationRow, ID_COLUMN};

/// Header of a fresh translation sheet: `id`, then each attribute followed by
/// its per-language columns.
pub fn template_header(attributes: &[Field], languages: &[String]) -> Vec<String> {
    let mut header = vec![ID_COLUMN.to_string()];
    for attribute in attributes {
        header.push(attribute.to_string());
        header.extend(
            languages
                .iter()
                .map(|language| TranslationColumn::new(*attribute, language.clone()).to_string()),
        );
    }
    header
}

/// Rows pushed back to the translators, one per POI.
///
/// Each row carries the current source text of every requested attribute
/// and one `attribute:language` cell per language, pre-filled with the
/// translation the POI already has, or empty.
pub fn rows_to_translate(
    pois: &[Poi],
    attributes: &[Field],
    languages: &[String],
) -> Vec<TranslationRow> {
    pois.iter()
        .map(|poi| {
            let mut row = TranslationRow::new(poi.id.clone());
            for attribute in attributes {
                let source = poi.text_attribute(attribute.as_str()).unwrap_or_default();
                row.cells.insert(attribute.to_string(), source.to_string());
                for language in languages {
                    let column = TranslationColumn::new(*attribute, language.clone()).to_string();
                    let existing = poi.text_attribute(&column).unwrap_or_default().to_string();
                    row.cells.insert(column, existing);
                }
            }
            row
        })
        .collect()
}
