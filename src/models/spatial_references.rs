use crate::models::common::BoundingBox2D;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisOrder {
    NorthEast,
    EastNorth,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialReferenceSpecification {
    pub name: String,
    pub spatial_reference: String,
    pub proj_string: String,
    pub extent: BoundingBox2D,
    #[serde(default)]
    pub axis_labels: Option<(String, String)>,
    #[serde(default)]
    pub axis_order: Option<AxisOrder>,
}
