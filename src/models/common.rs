use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: Uuid,
}

/// Body of every non-2xx answer of the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate2D {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox2D {
    pub lower_left_coordinate: Coordinate2D,
    pub upper_right_coordinate: Coordinate2D,
}

impl BoundingBox2D {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            lower_left_coordinate: Coordinate2D { x: min_x, y: min_y },
            upper_right_coordinate: Coordinate2D { x: max_x, y: max_y },
        }
    }

    /// `minx,miny,maxx,maxy` as used by OGC query strings.
    pub fn to_bbox_string(&self) -> String {
        format!(
            "{},{},{},{}",
            self.lower_left_coordinate.x,
            self.lower_left_coordinate.y,
            self.upper_right_coordinate.x,
            self.upper_right_coordinate.y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialPartition2D {
    pub upper_left_coordinate: Coordinate2D,
    pub lower_right_coordinate: Coordinate2D,
}

/// Milliseconds since the unix epoch, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: i64,
    pub end: i64,
}

impl TimeInterval {
    pub fn instant(at: i64) -> Self {
        Self { start: at, end: at }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpatialResolution {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct STRectangle {
    pub spatial_reference: String,
    pub bounding_box: BoundingBox2D,
    pub time_interval: TimeInterval,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RasterQueryRectangle {
    pub spatial_bounds: SpatialPartition2D,
    pub time_interval: TimeInterval,
    pub spatial_resolution: SpatialResolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderBy {
    NameAsc,
    NameDesc,
}

impl OrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::NameAsc => "NameAsc",
            OrderBy::NameDesc => "NameDesc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub citation: String,
    pub license: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_string() {
        let bbox = BoundingBox2D::new(-180.0, -90.0, 180.0, 90.0);
        assert_eq!(bbox.to_bbox_string(), "-180,-90,180,90");
    }

    #[test]
    fn test_st_rectangle_uses_camel_case() {
        let rect = STRectangle {
            spatial_reference: "EPSG:4326".to_string(),
            bounding_box: BoundingBox2D::new(0.0, 0.0, 1.0, 1.0),
            time_interval: TimeInterval::instant(0),
        };
        let json = serde_json::to_value(&rect).unwrap();
        assert_eq!(json["spatialReference"], "EPSG:4326");
        assert_eq!(json["boundingBox"]["upperRightCoordinate"]["x"], 1.0);
        assert_eq!(json["timeInterval"]["end"], 0);
    }
}
