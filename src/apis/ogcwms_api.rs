use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

const WMS_VERSION: &str = "1.3.0";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetMapParams {
    pub layers: String,
    pub bbox: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub styles: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transparent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sld: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sld_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<String>,
}

impl GetMapParams {
    pub fn png(layers: impl Into<String>, bbox: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            layers: layers.into(),
            bbox: bbox.into(),
            width,
            height,
            format: "image/png".to_string(),
            styles: String::new(),
            crs: None,
            time: None,
            transparent: None,
            bgcolor: None,
            sld: None,
            sld_body: None,
            elevation: None,
            exceptions: None,
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone)]
pub struct OGCWMSApi {
    client: ApiClient,
}

impl OGCWMSApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn capabilities(&self, workflow: Uuid) -> Result<String> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .ogc_request("wms", &workflow, "WMS", WMS_VERSION, "GetCapabilities")?
            .query(&[("format", "text/xml")]);
        self.client.send_text(request).await
    }

    /// Rendered map image.
    pub async fn map(&self, workflow: Uuid, params: &GetMapParams) -> Result<Vec<u8>> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .ogc_request("wms", &workflow, "WMS", WMS_VERSION, "GetMap")?
            .query(params);
        let image = self.client.send_bytes(request).await?;
        tracing::debug!(
            "Received {}x{} map ({} bytes)",
            params.width,
            params.height,
            image.len()
        );
        Ok(image)
    }

    pub async fn legend_graphic(&self, workflow: Uuid, layer: &str) -> Result<Vec<u8>> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .ogc_request("wms", &workflow, "WMS", WMS_VERSION, "GetLegendGraphic")?
            .query(&[("layer", layer)]);
        self.client.send_bytes(request).await
    }
}
