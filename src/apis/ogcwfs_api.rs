use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::GeoJson;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

const WFS_VERSION: &str = "2.0.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFeatureParams {
    pub type_names: String,
    pub bbox: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srs_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_resolution: Option<String>,
}

impl GetFeatureParams {
    pub fn new(type_names: impl Into<String>, bbox: impl Into<String>) -> Self {
        Self {
            type_names: type_names.into(),
            bbox: bbox.into(),
            time: None,
            srs_name: None,
            namespaces: None,
            count: None,
            sort_by: None,
            result_type: None,
            filter: None,
            property_name: None,
            query_resolution: None,
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone)]
pub struct OGCWFSApi {
    client: ApiClient,
}

impl OGCWFSApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn capabilities(&self, workflow: Uuid) -> Result<String> {
        let workflow = workflow.to_string();
        let request =
            self.client
                .ogc_request("wfs", &workflow, "WFS", WFS_VERSION, "GetCapabilities")?;
        self.client.send_text(request).await
    }

    pub async fn features(&self, workflow: Uuid, params: &GetFeatureParams) -> Result<GeoJson> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .ogc_request("wfs", &workflow, "WFS", WFS_VERSION, "GetFeature")?
            .query(params);
        let collection: GeoJson = self.client.send_json(request).await?;
        tracing::debug!("Received {} features", collection.len());
        Ok(collection)
    }
}
