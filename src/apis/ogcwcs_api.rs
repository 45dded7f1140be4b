use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WcsVersion {
    V1_1_0,
    #[default]
    V1_1_1,
}

impl WcsVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcsVersion::V1_1_0 => "1.1.0",
            WcsVersion::V1_1_1 => "1.1.1",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GetCoverageParams {
    pub identifier: String,
    /// `minx,miny,maxx,maxy,<crs urn>`
    pub boundingbox: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridbasecrs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridorigin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridoffsets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodatavalue: Option<f64>,
}

impl GetCoverageParams {
    pub fn geotiff(identifier: impl Into<String>, boundingbox: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            boundingbox: boundingbox.into(),
            format: "image/tiff".to_string(),
            gridbasecrs: None,
            gridorigin: None,
            gridoffsets: None,
            time: None,
            resx: None,
            resy: None,
            nodatavalue: None,
        }
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone)]
pub struct OGCWCSApi {
    client: ApiClient,
}

impl OGCWCSApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    /// Capabilities document (XML).
    pub async fn capabilities(&self, workflow: Uuid, version: WcsVersion) -> Result<String> {
        let workflow = workflow.to_string();
        let request = self.client.ogc_request(
            "wcs",
            &workflow,
            "WCS",
            version.as_str(),
            "GetCapabilities",
        )?;
        self.client.send_text(request).await
    }

    pub async fn describe_coverage(
        &self,
        workflow: Uuid,
        version: WcsVersion,
        identifiers: &str,
    ) -> Result<String> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .ogc_request(
                "wcs",
                &workflow,
                "WCS",
                version.as_str(),
                "DescribeCoverage",
            )?
            .query(&[("identifiers", identifiers)]);
        self.client.send_text(request).await
    }

    /// Raw coverage bytes in the requested `format`.
    pub async fn coverage(
        &self,
        workflow: Uuid,
        version: WcsVersion,
        params: &GetCoverageParams,
    ) -> Result<Vec<u8>> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .ogc_request("wcs", &workflow, "WCS", version.as_str(), "GetCoverage")?
            .query(params);
        let bytes = self.client.send_bytes(request).await?;
        tracing::debug!("Received coverage of {} bytes", bytes.len());
        Ok(bytes)
    }
}
