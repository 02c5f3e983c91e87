use common::model::category::Category;
use common::model::poi::Poi;
use std::collections::BTreeMap;

/// Buckets POIs by category. Every category has a bucket, empty ones
/// included; POIs keep their relative order.
pub fn group_by_category(pois: &[Poi]) -> BTreeMap<Category, Vec<&Poi>> {
    let mut groups: BTreeMap<Category, Vec<&Poi>> = Category::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();
    for poi in pois {
        groups.entry(poi.category).or_default().push(poi);
    }
    groups
}
