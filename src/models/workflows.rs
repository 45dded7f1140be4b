use crate::models::common::{Provenance, RasterQueryRectangle};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkflowType {
    Raster,
    Vector,
    Plot,
}

/// An operator graph; the operator tree itself is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    #[serde(rename = "type")]
    pub workflow_type: WorkflowType,
    pub operator: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedResultDescriptor {
    #[serde(rename = "type")]
    pub descriptor_type: String,
    #[serde(default)]
    pub spatial_reference: Option<String>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    pub data: Vec<serde_json::Value>,
    pub provenance: Provenance,
}

fn is_true(value: &bool) -> bool {
    *value
}

fn default_as_cog() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterDatasetFromWorkflow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub query: RasterQueryRectangle,
    /// Omitted from the body while it holds the server default.
    #[serde(default = "default_as_cog", skip_serializing_if = "is_true")]
    pub as_cog: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub task_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::{Coordinate2D, SpatialPartition2D, SpatialResolution, TimeInterval};

    fn query() -> RasterQueryRectangle {
        RasterQueryRectangle {
            spatial_bounds: SpatialPartition2D {
                upper_left_coordinate: Coordinate2D { x: -10.0, y: 10.0 },
                lower_right_coordinate: Coordinate2D { x: 10.0, y: -10.0 },
            },
            time_interval: TimeInterval::instant(0),
            spatial_resolution: SpatialResolution { x: 0.1, y: 0.1 },
        }
    }

    #[test]
    fn test_as_cog_default_is_omitted() {
        let request = RasterDatasetFromWorkflow {
            name: None,
            display_name: "NDVI".to_string(),
            description: None,
            query: query(),
            as_cog: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("asCog").is_none());
        assert!(json.get("name").is_none());
        assert_eq!(json["displayName"], "NDVI");
    }

    #[test]
    fn test_as_cog_false_is_sent() {
        let request = RasterDatasetFromWorkflow {
            name: Some("ndvi".to_string()),
            display_name: "NDVI".to_string(),
            description: None,
            query: query(),
            as_cog: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["asCog"], false);
    }

    #[test]
    fn test_workflow_type_field() {
        let workflow: Workflow = serde_json::from_value(serde_json::json!({
            "type": "Vector",
            "operator": { "type": "OgrSource", "params": { "data": "ne_10m_ports" } }
        }))
        .unwrap();
        assert_eq!(workflow.workflow_type, WorkflowType::Vector);
        assert_eq!(workflow.operator["params"]["data"], "ne_10m_ports");
    }

    #[test]
    fn test_result_descriptor_keeps_details() {
        let descriptor: TypedResultDescriptor = serde_json::from_value(serde_json::json!({
            "type": "raster",
            "spatialReference": "EPSG:4326",
            "dataType": "U8",
            "bands": [{ "name": "band", "measurement": { "type": "unitless" } }]
        }))
        .unwrap();
        assert_eq!(descriptor.descriptor_type, "raster");
        assert_eq!(descriptor.spatial_reference.as_deref(), Some("EPSG:4326"));
        assert_eq!(descriptor.details["dataType"], "U8");
    }
}
