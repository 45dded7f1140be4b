use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{PermissionListing, PermissionRequest, Resource};
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PermissionsApi {
    client: ApiClient,
}

impl PermissionsApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn add(&self, permission: &PermissionRequest) -> Result<()> {
        let request = self
            .client
            .request(Method::PUT, &["permissions"])?
            .json(permission);
        self.client.send_empty(request).await?;
        tracing::info!(
            "Granted {:?} on {} {} to role {}",
            permission.permission,
            permission.resource.type_name(),
            permission.resource.id_string(),
            permission.role_id
        );
        Ok(())
    }

    pub async fn remove(&self, permission: &PermissionRequest) -> Result<()> {
        let request = self
            .client
            .request(Method::DELETE, &["permissions"])?
            .json(permission);
        self.client.send_empty(request).await
    }

    pub async fn resource_permissions(
        &self,
        resource: &Resource,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<PermissionListing>> {
        let id = resource.id_string();
        let request = self
            .client
            .request(
                Method::GET,
                &["permissions", "resources", resource.type_name(), id.as_str()],
            )?
            .query(&[("offset", offset), ("limit", limit)]);
        self.client.send_json(request).await
    }
}
