use crate::models::common::STRectangle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeGranularity {
    Millis,
    Seconds,
    Minutes,
    Hours,
    Days,
    Months,
    Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeStep {
    pub granularity: TimeGranularity,
    pub step: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectOrder {
    DateAsc,
    DateDesc,
    NameAsc,
    NameDesc,
}

impl ProjectOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectOrder::DateAsc => "DateAsc",
            ProjectOrder::DateDesc => "DateDesc",
            ProjectOrder::NameAsc => "NameAsc",
            ProjectOrder::NameDesc => "NameDesc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub name: String,
    pub description: String,
    pub bounds: STRectangle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_step: Option<TimeStep>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectVersion {
    pub id: Uuid,
    pub changed: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerVisibility {
    pub data: bool,
    pub legend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLayer {
    pub workflow: Uuid,
    pub name: String,
    pub visibility: LayerVisibility,
    pub symbology: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    pub workflow: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub version: ProjectVersion,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub layers: Vec<ProjectLayer>,
    #[serde(default)]
    pub plots: Vec<Plot>,
    pub bounds: STRectangle,
    pub time_step: TimeStep,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub layer_names: Vec<String>,
    #[serde(default)]
    pub plot_names: Vec<String>,
    pub changed: DateTime<Utc>,
}

/// Marker used in place of a layer or plot when updating a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectUpdateToken {
    /// Keep the entry at this position unchanged.
    None,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LayerUpdate {
    Token(ProjectUpdateToken),
    Layer(ProjectLayer),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlotUpdate {
    Token(ProjectUpdateToken),
    Plot(Plot),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<LayerUpdate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plots: Option<Vec<PlotUpdate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounds: Option<STRectangle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_step: Option<TimeStep>,
}

impl UpdateProject {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            name: None,
            description: None,
            layers: None,
            plots: None,
            bounds: None,
            time_step: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_tokens_and_objects_share_a_list() {
        let updates: Vec<PlotUpdate> = serde_json::from_value(serde_json::json!([
            "none",
            "delete",
            { "workflow": "a3f1c2d4-5b6e-4f70-8a9b-0c1d2e3f4a5b", "name": "Histogram" }
        ]))
        .unwrap();

        assert_eq!(updates[0], PlotUpdate::Token(ProjectUpdateToken::None));
        assert_eq!(updates[1], PlotUpdate::Token(ProjectUpdateToken::Delete));
        match &updates[2] {
            PlotUpdate::Plot(plot) => assert_eq!(plot.name, "Histogram"),
            other => panic!("expected plot, got {:?}", other),
        }
    }

    #[test]
    fn test_layer_update_serializes_token_as_string() {
        let update = LayerUpdate::Token(ProjectUpdateToken::Delete);
        assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!("delete"));
    }

    #[test]
    fn test_update_project_skips_unchanged_fields() {
        let mut update = UpdateProject::new(Uuid::nil());
        update.name = Some("Renamed".to_string());
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["name"], "Renamed");
        assert!(json.get("layers").is_none());
        assert!(json.get("timeStep").is_none());
    }
}
