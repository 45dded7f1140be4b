use crate::apis::{
    DatasetsApi, GeneralApi, LayersApi, OGCWCSApi, OGCWFSApi, OGCWMSApi, PermissionsApi, PlotsApi,
    ProjectsApi, SessionApi, SpatialReferencesApi, TasksApi, UploadsApi, UserApi, WorkflowsApi,
};
use crate::config::toml_config::{AuthMode, ClientConfig};
use crate::core::configuration::Configuration;
use crate::models::{UserCredentials, UserSession};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Entry point to every API group, sharing one `Configuration`.
#[derive(Debug, Clone)]
pub struct GeoEngineClient {
    configuration: Arc<Configuration>,
}

impl GeoEngineClient {
    pub fn new(configuration: Configuration) -> Self {
        Self {
            configuration: Arc::new(configuration),
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn session_token(&self) -> Option<&str> {
        self.configuration.bearer_access_token.as_deref()
    }

    /// A client for the same server, authenticated with `token`.
    pub fn with_session(&self, token: impl Into<String>) -> Self {
        Self::new((*self.configuration).clone().with_session_token(token))
    }

    pub async fn anonymous(&self) -> Result<(Self, UserSession)> {
        let session = self.session().anonymous().await?;
        Ok((self.with_session(session.id.to_string()), session))
    }

    pub async fn login(&self, credentials: &UserCredentials) -> Result<(Self, UserSession)> {
        let session = self.session().login(credentials).await?;
        Ok((self.with_session(session.id.to_string()), session))
    }

    /// Builds a client from a file configuration and performs its auth step.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = Self::new(config.to_configuration()?);

        match config.auth.mode() {
            AuthMode::Token(token) => Ok(client.with_session(token)),
            AuthMode::Credentials(credentials) => {
                let (client, _) = client.login(&credentials).await?;
                Ok(client)
            }
            AuthMode::Anonymous => {
                let (client, _) = client.anonymous().await?;
                Ok(client)
            }
            AuthMode::Unauthenticated => Ok(client),
        }
    }

    pub fn datasets(&self) -> DatasetsApi {
        DatasetsApi::new(self.configuration.clone())
    }

    pub fn general(&self) -> GeneralApi {
        GeneralApi::new(self.configuration.clone())
    }

    pub fn layers(&self) -> LayersApi {
        LayersApi::new(self.configuration.clone())
    }

    pub fn wcs(&self) -> OGCWCSApi {
        OGCWCSApi::new(self.configuration.clone())
    }

    pub fn wfs(&self) -> OGCWFSApi {
        OGCWFSApi::new(self.configuration.clone())
    }

    pub fn wms(&self) -> OGCWMSApi {
        OGCWMSApi::new(self.configuration.clone())
    }

    pub fn permissions(&self) -> PermissionsApi {
        PermissionsApi::new(self.configuration.clone())
    }

    pub fn plots(&self) -> PlotsApi {
        PlotsApi::new(self.configuration.clone())
    }

    pub fn projects(&self) -> ProjectsApi {
        ProjectsApi::new(self.configuration.clone())
    }

    pub fn session(&self) -> SessionApi {
        SessionApi::new(self.configuration.clone())
    }

    pub fn spatial_references(&self) -> SpatialReferencesApi {
        SpatialReferencesApi::new(self.configuration.clone())
    }

    pub fn tasks(&self) -> TasksApi {
        TasksApi::new(self.configuration.clone())
    }

    pub fn uploads(&self) -> UploadsApi {
        UploadsApi::new(self.configuration.clone())
    }

    pub fn user(&self) -> UserApi {
        UserApi::new(self.configuration.clone())
    }

    pub fn workflows(&self) -> WorkflowsApi {
        WorkflowsApi::new(self.configuration.clone())
    }
}

impl Default for GeoEngineClient {
    fn default() -> Self {
        Self::new(Configuration::default())
    }
}
