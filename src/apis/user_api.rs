use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{AddRole, IdResponse, Quota, RoleDescription, UpdateQuota, UserRegistration};
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn register(&self, registration: &UserRegistration) -> Result<IdResponse> {
        let request = self
            .client
            .request(Method::POST, &["user"])?
            .json(registration);
        self.client.send_json(request).await
    }

    /// Quota of the session's user.
    pub async fn quota(&self) -> Result<Quota> {
        let request = self.client.request(Method::GET, &["quota"])?;
        self.client.send_json(request).await
    }

    pub async fn user_quota(&self, user: Uuid) -> Result<Quota> {
        let user = user.to_string();
        let request = self
            .client
            .request(Method::GET, &["quotas", user.as_str()])?;
        self.client.send_json(request).await
    }

    pub async fn update_user_quota(&self, user: Uuid, update: UpdateQuota) -> Result<()> {
        let user = user.to_string();
        let request = self
            .client
            .request(Method::POST, &["quotas", user.as_str()])?
            .json(&update);
        self.client.send_empty(request).await
    }

    pub async fn add_role(&self, role: &AddRole) -> Result<IdResponse> {
        let request = self.client.request(Method::POST, &["roles"])?.json(role);
        let created: IdResponse = self.client.send_json(request).await?;
        tracing::info!("Added role '{}' ({})", role.name, created.id);
        Ok(created)
    }

    pub async fn remove_role(&self, role: Uuid) -> Result<()> {
        let role = role.to_string();
        let request = self
            .client
            .request(Method::DELETE, &["roles", role.as_str()])?;
        self.client.send_empty(request).await
    }

    pub async fn assign_role(&self, role: Uuid, user: Uuid) -> Result<()> {
        let role = role.to_string();
        let user = user.to_string();
        let request = self.client.request(
            Method::POST,
            &["roles", role.as_str(), "users", user.as_str()],
        )?;
        self.client.send_empty(request).await
    }

    pub async fn revoke_role(&self, role: Uuid, user: Uuid) -> Result<()> {
        let role = role.to_string();
        let user = user.to_string();
        let request = self.client.request(
            Method::DELETE,
            &["roles", role.as_str(), "users", user.as_str()],
        )?;
        self.client.send_empty(request).await
    }

    pub async fn role_by_name(&self, name: &str) -> Result<IdResponse> {
        let request = self
            .client
            .request(Method::GET, &["roles", "byName", name])?;
        self.client.send_json(request).await
    }

    pub async fn role_descriptions(&self) -> Result<Vec<RoleDescription>> {
        let request = self
            .client
            .request(Method::GET, &["user", "roles", "descriptions"])?;
        self.client.send_json(request).await
    }
}
