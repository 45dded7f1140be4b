use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{
    IdResponse, ProvenanceEntry, RasterDatasetFromWorkflow, TaskResponse, TypedResultDescriptor,
    Workflow,
};
use crate::utils::error::Result;
use reqwest::Method;
use std::io::{Cursor, Read};
use std::sync::Arc;
use uuid::Uuid;
use zip::ZipArchive;

/// The zip bundle of a workflow's metadata, citation and provenance.
#[derive(Debug)]
pub struct MetadataArchive {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl MetadataArchive {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(bytes))?;
        Ok(Self { archive })
    }

    pub fn len(&self) -> usize {
        self.archive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    pub fn read_file(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut file = self.archive.by_name(name)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        Ok(content)
    }

    pub fn read_json(&mut self, name: &str) -> Result<serde_json::Value> {
        let content = self.read_file(name)?;
        Ok(serde_json::from_slice(&content)?)
    }
}

#[derive(Debug, Clone)]
pub struct WorkflowsApi {
    client: ApiClient,
}

impl WorkflowsApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn register(&self, workflow: &Workflow) -> Result<IdResponse> {
        let request = self
            .client
            .request(Method::POST, &["workflow"])?
            .json(workflow);
        let registered: IdResponse = self.client.send_json(request).await?;
        tracing::debug!("Registered {:?} workflow {}", workflow.workflow_type, registered.id);
        Ok(registered)
    }

    pub async fn load(&self, workflow: Uuid) -> Result<Workflow> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .request(Method::GET, &["workflow", workflow.as_str()])?;
        self.client.send_json(request).await
    }

    pub async fn metadata(&self, workflow: Uuid) -> Result<TypedResultDescriptor> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .request(Method::GET, &["workflow", workflow.as_str(), "metadata"])?;
        self.client.send_json(request).await
    }

    pub async fn provenance(&self, workflow: Uuid) -> Result<Vec<ProvenanceEntry>> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .request(Method::GET, &["workflow", workflow.as_str(), "provenance"])?;
        self.client.send_json(request).await
    }

    pub async fn all_metadata_zip(&self, workflow: Uuid) -> Result<MetadataArchive> {
        let workflow = workflow.to_string();
        let request = self.client.request(
            Method::GET,
            &["workflow", workflow.as_str(), "allMetadata", "zip"],
        )?;
        let bytes = self.client.send_bytes(request).await?;
        MetadataArchive::from_bytes(bytes)
    }

    /// Starts a server task that materialises the raster workflow as a dataset.
    pub async fn dataset_from_workflow(
        &self,
        workflow: Uuid,
        request_body: &RasterDatasetFromWorkflow,
    ) -> Result<TaskResponse> {
        let workflow = workflow.to_string();
        let request = self
            .client
            .request(Method::POST, &["datasetFromWorkflow", workflow.as_str()])?
            .json(request_body);
        let task: TaskResponse = self.client.send_json(request).await?;
        tracing::info!("Dataset creation running as task {}", task.task_id);
        Ok(task)
    }
}
