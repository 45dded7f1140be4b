use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{
    AddLayer, AddLayerCollection, IdResponse, Layer, LayerCollection, SearchType,
};
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;
use uuid::Uuid;

/// Paging for collection listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionPage {
    pub offset: u32,
    pub limit: u32,
}

impl Default for CollectionPage {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

impl CollectionPage {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSearchParams {
    pub search_type: SearchType,
    pub search_string: String,
    pub page: CollectionPage,
}

impl LayerSearchParams {
    pub fn fulltext(search_string: impl Into<String>) -> Self {
        Self {
            search_type: SearchType::Fulltext,
            search_string: search_string.into(),
            page: CollectionPage::default(),
        }
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let search_type = match self.search_type {
            SearchType::Fulltext => "fulltext",
            SearchType::Prefix => "prefix",
        };
        let mut pairs = vec![
            ("searchType", search_type.to_string()),
            ("searchString", self.search_string.clone()),
        ];
        pairs.extend(self.page.query_pairs());
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct LayersApi {
    client: ApiClient,
}

impl LayersApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn root_collection(&self, page: CollectionPage) -> Result<LayerCollection> {
        let request = self
            .client
            .request(Method::GET, &["layers", "collections"])?
            .query(&page.query_pairs());
        self.client.send_json(request).await
    }

    pub async fn collection(
        &self,
        provider: Uuid,
        collection: &str,
        page: CollectionPage,
    ) -> Result<LayerCollection> {
        let provider = provider.to_string();
        let request = self
            .client
            .request(Method::GET, &["layers", "collections", provider.as_str(), collection])?
            .query(&page.query_pairs());
        self.client.send_json(request).await
    }

    pub async fn layer(&self, provider: Uuid, layer: &str) -> Result<Layer> {
        let provider = provider.to_string();
        let request = self
            .client
            .request(Method::GET, &["layers", provider.as_str(), layer])?;
        self.client.send_json(request).await
    }

    /// Registers the layer's workflow and returns its id.
    pub async fn layer_to_workflow_id(&self, provider: Uuid, layer: &str) -> Result<IdResponse> {
        let provider = provider.to_string();
        let request = self
            .client
            .request(Method::POST, &["layers", provider.as_str(), layer, "workflowId"])?;
        self.client.send_json(request).await
    }

    pub async fn search(
        &self,
        provider: Uuid,
        collection: &str,
        params: &LayerSearchParams,
    ) -> Result<LayerCollection> {
        let provider = provider.to_string();
        let request = self
            .client
            .request(
                Method::GET,
                &["layers", "collections", "search", provider.as_str(), collection],
            )?
            .query(&params.query_pairs());
        self.client.send_json(request).await
    }

    pub async fn autocomplete(
        &self,
        provider: Uuid,
        collection: &str,
        params: &LayerSearchParams,
    ) -> Result<Vec<String>> {
        let provider = provider.to_string();
        let request = self
            .client
            .request(
                Method::GET,
                &[
                    "layers",
                    "collections",
                    "search",
                    "autocomplete",
                    provider.as_str(),
                    collection,
                ],
            )?
            .query(&params.query_pairs());
        self.client.send_json(request).await
    }

    pub async fn add_layer(&self, collection: &str, layer: &AddLayer) -> Result<IdResponse> {
        let request = self
            .client
            .request(Method::POST, &["layerDb", "collections", collection, "layers"])?
            .json(layer);
        let created: IdResponse = self.client.send_json(request).await?;
        tracing::info!("Added layer {} to collection {}", created.id, collection);
        Ok(created)
    }

    pub async fn add_collection(
        &self,
        parent: &str,
        collection: &AddLayerCollection,
    ) -> Result<IdResponse> {
        let request = self
            .client
            .request(Method::POST, &["layerDb", "collections", parent, "collections"])?
            .json(collection);
        self.client.send_json(request).await
    }

    pub async fn add_existing_layer_to_collection(&self, collection: &str, layer: &str) -> Result<()> {
        let request = self.client.request(
            Method::POST,
            &["layerDb", "collections", collection, "layers", layer],
        )?;
        self.client.send_empty(request).await
    }

    pub async fn remove_layer_from_collection(&self, collection: &str, layer: &str) -> Result<()> {
        let request = self.client.request(
            Method::DELETE,
            &["layerDb", "collections", collection, "layers", layer],
        )?;
        self.client.send_empty(request).await
    }

    pub async fn remove_layer(&self, layer: &str) -> Result<()> {
        let request = self
            .client
            .request(Method::DELETE, &["layerDb", "layers", layer])?;
        self.client.send_empty(request).await
    }

    pub async fn remove_collection(&self, collection: &str) -> Result<()> {
        let request = self
            .client
            .request(Method::DELETE, &["layerDb", "collections", collection])?;
        self.client.send_empty(request).await
    }
}
