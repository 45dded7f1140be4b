use crate::core::configuration::Configuration;
use crate::models::ErrorResponse;
use crate::utils::error::{ClientError, Result};
use reqwest::header::USER_AGENT;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

/// Request plumbing shared by the API groups.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Arc<Configuration>,
}

impl ApiClient {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Appends `segments` to the base path, percent-encoding each one.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.config.base_path)?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidConfigValueError {
                field: "base_path".to_string(),
                value: self.config.base_path.clone(),
                reason: "URL cannot be used as a base path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url(segments)?;
        tracing::debug!("Preparing {} {}", method, url);

        let mut builder = self.config.client.request(method, url);
        if let Some(user_agent) = &self.config.user_agent {
            builder = builder.header(USER_AGENT, user_agent);
        }
        if let Some(token) = &self.config.bearer_access_token {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    /// `GET /{service_path}/{workflow}` with the OGC selectors as query parameters.
    pub fn ogc_request(
        &self,
        service_path: &str,
        workflow: &str,
        service: &str,
        version: &str,
        request: &str,
    ) -> Result<RequestBuilder> {
        Ok(self.request(Method::GET, &[service_path, workflow])?.query(&[
            ("service", service),
            ("request", request),
            ("version", version),
        ]))
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = error_from_body(status.as_u16(), body);
        tracing::warn!("Request failed: {}", error);
        Err(error)
    }

    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.execute(builder).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    pub async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        self.execute(builder).await?;
        Ok(())
    }

    pub async fn send_text(&self, builder: RequestBuilder) -> Result<String> {
        let response = self.execute(builder).await?;
        Ok(response.text().await?)
    }

    pub async fn send_bytes(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let response = self.execute(builder).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

pub(crate) fn error_from_body(status: u16, body: String) -> ClientError {
    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(ErrorResponse { error, message }) => ClientError::ApiError {
            status,
            error,
            message,
        },
        Err(_) => ClientError::UnexpectedStatus { status, body },
    }
}
