use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{STRectangle, UserCredentials, UserSession};
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct SessionApi {
    client: ApiClient,
}

impl SessionApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn anonymous(&self) -> Result<UserSession> {
        let request = self.client.request(Method::POST, &["anonymous"])?;
        let session: UserSession = self.client.send_json(request).await?;
        tracing::info!("Started anonymous session {}", session.id);
        Ok(session)
    }

    pub async fn login(&self, credentials: &UserCredentials) -> Result<UserSession> {
        let request = self
            .client
            .request(Method::POST, &["login"])?
            .json(credentials);
        let session: UserSession = self.client.send_json(request).await?;
        tracing::info!("Logged in as {}", credentials.email);
        Ok(session)
    }

    pub async fn logout(&self) -> Result<()> {
        let request = self.client.request(Method::POST, &["logout"])?;
        self.client.send_empty(request).await
    }

    pub async fn session(&self) -> Result<UserSession> {
        let request = self.client.request(Method::GET, &["session"])?;
        self.client.send_json(request).await
    }

    pub async fn set_project(&self, project: Uuid) -> Result<()> {
        let project = project.to_string();
        let request = self
            .client
            .request(Method::POST, &["session", "project", project.as_str()])?;
        self.client.send_empty(request).await
    }

    pub async fn set_view(&self, view: &STRectangle) -> Result<()> {
        let request = self
            .client
            .request(Method::POST, &["session", "view"])?
            .json(view);
        self.client.send_empty(request).await
    }
}
