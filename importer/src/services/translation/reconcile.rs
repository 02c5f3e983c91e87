use common::model::diff::Diff;
use common::model::poi::{AttributeUpdate, Poi};
use common::model::translation::TranslationRow;
use log::debug;
use std::collections::HashMap;

/// Drops rows of POIs that were modified or deleted in this run.
///
/// Their source text changed or disappeared, so the collected translations
/// are stale; the POIs are sent out again through the template instead.
pub fn filter_rows(rows: Vec<TranslationRow>, diff: &Diff) -> Vec<TranslationRow> {
    let stale = diff.stale_ids();
    rows.into_iter()
        .filter(|row| !stale.contains(row.id.as_str()))
        .collect()
}

/// Copies translated cells onto the matching POIs.
///
/// Blank cells are removed from every row first, so a blank never replaces
/// text the POI already has. Returns the number of POIs that had a row.
pub fn merge_translations(pois: &mut [Poi], rows: &[TranslationRow]) -> usize {
    let by_id: HashMap<&str, TranslationRow> = rows
        .iter()
        .map(|row| (row.id.as_str(), row.without_empty_cells()))
        .collect();

    let mut merged = 0;
    for poi in pois.iter_mut() {
        let Some(row) = by_id.get(poi.id.as_str()) else {
            continue;
        };
        for (column, value) in &row.cells {
            if poi.set_text_attribute(column, value.clone()) == AttributeUpdate::Ignored {
                debug!("Column '{}' not merged into POI {}", column, poi.id);
            }
        }
        merged += 1;
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::category::Category;
    use std::collections::BTreeMap;

    fn poi(id: &str) -> Poi {
        Poi {
            id: id.to_string(),
            category: Category::LegalAssistance,
            verified: true,
            lat: 52.0,
            lng: 21.0,
            name: format!("Punkt {id}"),
            description: None,
            phone: None,
            address: None,
            opening_hours: None,
            website: None,
            localized: BTreeMap::new(),
        }
    }

    #[test]
    fn modified_and_deleted_rows_are_filtered_by_key() {
        let mut diff = Diff::default();
        diff.modified.insert("1".to_string(), poi("1"));
        diff.deleted.insert("2".to_string(), poi("2"));
        let rows = vec![
            TranslationRow::new("1"),
            TranslationRow::new("2"),
            TranslationRow::new("3"),
        ];

        let kept = filter_rows(rows, &diff);
        let ids: Vec<&str> = kept.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }

    #[test]
    fn created_rows_are_kept() {
        let mut diff = Diff::default();
        diff.created.insert("4".to_string(), poi("4"));
        let kept = filter_rows(vec![TranslationRow::new("4")], &diff);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn blank_cells_do_not_clobber() {
        let mut pois = vec![poi("3")];
        pois[0]
            .localized
            .insert("name:pl".to_string(), "Punkt trzeci".to_string());

        let rows = vec![TranslationRow::new("3")
            .with_cell("name:pl", "")
            .with_cell("name:en", "Third point")];
        assert_eq!(merge_translations(&mut pois, &rows), 1);

        assert_eq!(pois[0].text_attribute("name:pl"), Some("Punkt trzeci"));
        assert_eq!(pois[0].text_attribute("name:en"), Some("Third point"));
    }

    #[test]
    fn base_text_is_overwritten_but_typed_values_are_not() {
        let mut pois = vec![poi("5"), poi("6")];
        let rows = vec![TranslationRow::new("5")
            .with_cell("name", "Nowa nazwa")
            .with_cell("lat", "1.0")];

        assert_eq!(merge_translations(&mut pois, &rows), 1);
        assert_eq!(pois[0].name, "Nowa nazwa");
        assert_eq!(pois[0].lat, 52.0);
        assert_eq!(pois[1].name, "Punkt 6");
    }
}
