use crate::core::api_client::ApiClient;
use crate::core::configuration::Configuration;
use crate::models::{IdResponse, UploadFileLayersResponse, UploadFilesResponse};
use crate::utils::error::{ClientError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Method;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

/// One file of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ClientError::IoError(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("Not a file path: {}", path.display()),
                ))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { name, bytes })
    }
}

#[derive(Debug, Clone)]
pub struct UploadsApi {
    client: ApiClient,
}

impl UploadsApi {
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self {
            client: ApiClient::new(configuration),
        }
    }

    pub async fn upload(&self, files: Vec<UploadFile>) -> Result<IdResponse> {
        let count = files.len();
        let total_bytes: usize = files.iter().map(|f| f.bytes.len()).sum();

        let form = files.into_iter().fold(Form::new(), |form, file| {
            form.part("files[]", Part::bytes(file.bytes).file_name(file.name))
        });

        let request = self
            .client
            .request(Method::POST, &["upload"])?
            .multipart(form);
        let created: IdResponse = self.client.send_json(request).await?;
        tracing::info!(
            "Uploaded {} files ({} bytes) as {}",
            count,
            total_bytes,
            created.id
        );
        Ok(created)
    }

    pub async fn files(&self, upload: Uuid) -> Result<UploadFilesResponse> {
        let upload = upload.to_string();
        let request = self
            .client
            .request(Method::GET, &["uploads", upload.as_str(), "files"])?;
        self.client.send_json(request).await
    }

    pub async fn file_layers(&self, upload: Uuid, file: &str) -> Result<UploadFileLayersResponse> {
        let upload = upload.to_string();
        let request = self.client.request(
            Method::GET,
            &["uploads", upload.as_str(), "files", file, "layers"],
        )?;
        self.client.send_json(request).await
    }
}
