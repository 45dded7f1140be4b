use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{
    CreateProject, IdResponse, Project, ProjectListing, ProjectOrder, ProjectVersion, UpdateProject,
};
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProjectsParams {
    pub order: ProjectOrder,
    pub offset: u32,
    pub limit: u32,
}

impl Default for ListProjectsParams {
    fn default() -> Self {
        Self {
            order: ProjectOrder::DateDesc,
            offset: 0,
            limit: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectsApi {
    client: ApiClient,
}

impl ProjectsApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn create(&self, project: &CreateProject) -> Result<IdResponse> {
        let request = self.client.request(Method::POST, &["project"])?.json(project);
        let created: IdResponse = self.client.send_json(request).await?;
        tracing::info!("Created project '{}' ({})", project.name, created.id);
        Ok(created)
    }

    pub async fn list(&self, params: ListProjectsParams) -> Result<Vec<ProjectListing>> {
        let request = self.client.request(Method::GET, &["projects"])?.query(&[
            ("order", params.order.as_str().to_string()),
            ("offset", params.offset.to_string()),
            ("limit", params.limit.to_string()),
        ]);
        self.client.send_json(request).await
    }

    pub async fn load_latest(&self, project: Uuid) -> Result<Project> {
        let project = project.to_string();
        let request = self
            .client
            .request(Method::GET, &["project", project.as_str()])?;
        self.client.send_json(request).await
    }

    pub async fn load_version(&self, project: Uuid, version: Uuid) -> Result<Project> {
        let project = project.to_string();
        let version = version.to_string();
        let request = self
            .client
            .request(Method::GET, &["project", project.as_str(), version.as_str()])?;
        self.client.send_json(request).await
    }

    pub async fn update(&self, update: &UpdateProject) -> Result<()> {
        let project = update.id.to_string();
        let request = self
            .client
            .request(Method::PATCH, &["project", project.as_str()])?
            .json(update);
        self.client.send_empty(request).await
    }

    pub async fn delete(&self, project: Uuid) -> Result<()> {
        let project = project.to_string();
        let request = self
            .client
            .request(Method::DELETE, &["project", project.as_str()])?;
        self.client.send_empty(request).await
    }

    pub async fn versions(&self, project: Uuid) -> Result<Vec<ProjectVersion>> {
        let project = project.to_string();
        let request = self
            .client
            .request(Method::GET, &["project", project.as_str(), "versions"])?;
        self.client.send_json(request).await
    }
}
