use serde::{Deserialize, Serialize};

/// A GeoJSON feature collection as returned by WFS `GetFeature`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJson {
    #[serde(rename = "type")]
    pub geojson_type: String,
    pub features: Vec<serde_json::Value>,
}

impl GeoJson {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
