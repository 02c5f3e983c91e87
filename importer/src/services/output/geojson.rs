use common::model::poi::Poi;
use serde::Serialize;
use serde_json::{Map, Value};

/// GeoJSON `FeatureCollection` root object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature>,
}

/// One POI as a GeoJSON `Feature`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

/// Always a `Point`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

impl Feature {
    /// Point feature for a POI; every attribute except the coordinates goes
    /// into `properties`, translated columns included.
    pub fn from_poi(poi: &Poi) -> Result<Feature, serde_json::Error> {
        let mut properties = match serde_json::to_value(poi)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        properties.remove("lat");
        properties.remove("lng");
        Ok(Feature {
            kind: "Feature",
            geometry: Geometry {
                kind: "Point",
                coordinates: [poi.lng, poi.lat],
            },
            properties,
        })
    }
}

/// Collects POIs into a FeatureCollection, one point feature each, in
/// iteration order.
pub fn feature_collection<'a, I>(pois: I) -> Result<FeatureCollection, serde_json::Error>
where
    I: IntoIterator<Item = &'a Poi>,
{
    let features = pois
        .into_iter()
        .map(Feature::from_poi)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FeatureCollection {
        kind: "FeatureCollection",
        features,
    })
}
