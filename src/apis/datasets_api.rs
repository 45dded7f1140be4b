use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{
    AutoCreateDataset, CreateDataset, Dataset, DatasetListing, DatasetNameResponse,
    MetaDataSuggestion, OrderBy, SuggestMetaData, Volume,
};
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDatasetsParams {
    pub order: OrderBy,
    pub offset: u32,
    pub limit: u32,
    pub filter: Option<String>,
    pub tags: Vec<String>,
}

impl Default for ListDatasetsParams {
    fn default() -> Self {
        Self {
            order: OrderBy::NameAsc,
            offset: 0,
            limit: 20,
            filter: None,
            tags: Vec::new(),
        }
    }
}

impl ListDatasetsParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("order", self.order.as_str().to_string()),
            ("offset", self.offset.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(filter) = &self.filter {
            pairs.push(("filter", filter.clone()));
        }
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        pairs
    }
}

#[derive(Debug, Clone)]
pub struct DatasetsApi {
    client: ApiClient,
}

impl DatasetsApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn list(&self, params: &ListDatasetsParams) -> Result<Vec<DatasetListing>> {
        let request = self
            .client
            .request(Method::GET, &["datasets"])?
            .query(&params.query_pairs());
        let listings: Vec<DatasetListing> = self.client.send_json(request).await?;
        tracing::debug!("Listed {} datasets", listings.len());
        Ok(listings)
    }

    pub async fn get(&self, dataset: &str) -> Result<Dataset> {
        let request = self.client.request(Method::GET, &["dataset", dataset])?;
        self.client.send_json(request).await
    }

    pub async fn create(&self, create: &CreateDataset) -> Result<DatasetNameResponse> {
        let request = self.client.request(Method::POST, &["dataset"])?.json(create);
        let created: DatasetNameResponse = self.client.send_json(request).await?;
        tracing::info!("Created dataset {}", created.dataset_name);
        Ok(created)
    }

    pub async fn auto_create(&self, create: &AutoCreateDataset) -> Result<DatasetNameResponse> {
        let request = self
            .client
            .request(Method::POST, &["dataset", "auto"])?
            .json(create);
        let created: DatasetNameResponse = self.client.send_json(request).await?;
        tracing::info!(
            "Created dataset {} from upload {}",
            created.dataset_name,
            create.upload
        );
        Ok(created)
    }

    pub async fn suggest_meta_data(&self, suggest: &SuggestMetaData) -> Result<MetaDataSuggestion> {
        let request = self
            .client
            .request(Method::POST, &["dataset", "suggest"])?
            .json(suggest);
        self.client.send_json(request).await
    }

    pub async fn delete(&self, dataset: &str) -> Result<()> {
        let request = self.client.request(Method::DELETE, &["dataset", dataset])?;
        self.client.send_empty(request).await?;
        tracing::info!("Deleted dataset {}", dataset);
        Ok(())
    }

    pub async fn list_volumes(&self) -> Result<Vec<Volume>> {
        let request = self.client.request(Method::GET, &["dataset", "volumes"])?;
        self.client.send_json(request).await
    }
}
