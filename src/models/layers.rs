use crate::models::workflows::Workflow;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLayerId {
    pub provider_id: Uuid,
    pub layer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderLayerCollectionId {
    pub provider_id: Uuid,
    pub collection_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub id: ProviderLayerId,
    pub name: String,
    pub description: String,
    pub workflow: Workflow,
    #[serde(default)]
    pub symbology: Option<serde_json::Value>,
    #[serde(default)]
    pub properties: Vec<(String, String)>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerListing {
    pub id: ProviderLayerId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerCollectionListing {
    pub id: ProviderLayerCollectionId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CollectionItem {
    Collection(LayerCollectionListing),
    Layer(LayerListing),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerCollection {
    pub id: ProviderLayerCollectionId,
    pub name: String,
    pub description: String,
    pub items: Vec<CollectionItem>,
    #[serde(default)]
    pub entry_label: Option<String>,
    #[serde(default)]
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddLayer {
    pub name: String,
    pub description: String,
    pub workflow: Workflow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbology: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddLayerCollection {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<(String, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    Fulltext,
    Prefix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_items_are_tagged_by_type() {
        let collection: LayerCollection = serde_json::from_value(serde_json::json!({
            "id": {
                "providerId": "ce5e84db-cbf9-48a2-9a32-d4b7cc56ea74",
                "collectionId": "05102bb3-a855-4a37-8a8a-30026a91fef1"
            },
            "name": "Layers",
            "description": "All available Geo Engine layers",
            "items": [
                {
                    "type": "collection",
                    "id": {
                        "providerId": "ce5e84db-cbf9-48a2-9a32-d4b7cc56ea74",
                        "collectionId": "546073b6-d535-4205-b601-99675c9f6dd7"
                    },
                    "name": "Datasets",
                    "description": "Basic Layers for all Datasets"
                },
                {
                    "type": "layer",
                    "id": {
                        "providerId": "ce5e84db-cbf9-48a2-9a32-d4b7cc56ea74",
                        "layerId": "b75db46e-2b9a-4a86-b33f-bc06a73cd711"
                    },
                    "name": "Ports",
                    "description": "Ports of the world",
                    "properties": [["author", "geo engine"]]
                }
            ],
            "entryLabel": null,
            "properties": []
        }))
        .unwrap();

        assert_eq!(collection.items.len(), 2);
        assert!(matches!(collection.items[0], CollectionItem::Collection(_)));
        match &collection.items[1] {
            CollectionItem::Layer(layer) => {
                assert_eq!(layer.name, "Ports");
                assert_eq!(layer.properties[0].0, "author");
            }
            other => panic!("expected layer, got {:?}", other),
        }
    }
}
