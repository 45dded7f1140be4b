use crate::models::common::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Permission {
    Read,
    Owner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "camelCase")]
pub enum Resource {
    Layer(String),
    LayerCollection(String),
    Project(Uuid),
    Dataset(String),
}

impl Resource {
    pub fn type_name(&self) -> &'static str {
        match self {
            Resource::Layer(_) => "layer",
            Resource::LayerCollection(_) => "layerCollection",
            Resource::Project(_) => "project",
            Resource::Dataset(_) => "dataset",
        }
    }

    pub fn id_string(&self) -> String {
        match self {
            Resource::Layer(id) | Resource::LayerCollection(id) | Resource::Dataset(id) => id.clone(),
            Resource::Project(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRequest {
    pub resource: Resource,
    pub role_id: Uuid,
    pub permission: Permission,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionListing {
    pub resource: Resource,
    pub role: Role,
    pub permission: Permission,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_is_adjacently_tagged() {
        let request = PermissionRequest {
            resource: Resource::Dataset("ne_10m_ports".to_string()),
            role_id: Uuid::nil(),
            permission: Permission::Read,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["resource"]["type"], "dataset");
        assert_eq!(json["resource"]["id"], "ne_10m_ports");
        assert_eq!(json["permission"], "Read");
        assert_eq!(json["roleId"], Uuid::nil().to_string());
    }

    #[test]
    fn test_resource_path_parts() {
        let resource = Resource::LayerCollection("root".to_string());
        assert_eq!(resource.type_name(), "layerCollection");
        assert_eq!(resource.id_string(), "root");
    }
}
