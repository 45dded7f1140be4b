use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::ServerInfo;
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct GeneralApi {
    client: ApiClient,
}

impl GeneralApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn server_info(&self) -> Result<ServerInfo> {
        let request = self.client.request(Method::GET, &["info"])?;
        self.client.send_json(request).await
    }

    /// Succeeds when the server answers its health endpoint.
    pub async fn available(&self) -> Result<()> {
        let request = self.client.request(Method::GET, &["available"])?;
        self.client.send_empty(request).await
    }
}
