use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::SpatialReferenceSpecification;
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct SpatialReferencesApi {
    client: ApiClient,
}

impl SpatialReferencesApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    /// `srs` in `AUTHORITY:CODE` form, e.g. `EPSG:4326`.
    pub async fn specification(&self, srs: &str) -> Result<SpatialReferenceSpecification> {
        let request = self
            .client
            .request(Method::GET, &["spatialReferenceSpecification", srs])?;
        self.client.send_json(request).await
    }
}
