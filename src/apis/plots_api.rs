use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::WrappedPlotOutput;
use crate::utils::error::Result;
use reqwest::Method;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotQueryParams {
    pub bbox: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,
    pub time: String,
    pub spatial_resolution: String,
}

#[derive(Debug, Clone)]
pub struct PlotsApi {
    client: ApiClient,
}

impl PlotsApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn plot(&self, workflow: Uuid, params: &PlotQueryParams) -> Result<WrappedPlotOutput> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .request(Method::GET, &["plot", workflow.as_str()])?
            .query(params);
        self.client.send_json(request).await
    }
}
