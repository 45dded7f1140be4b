use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

pub const DEFAULT_BASE_PATH: &str = "http://localhost:3030/api";

pub fn default_user_agent() -> String {
    format!(
        "geoengine/openapi-client/rust/{}",
        env!("CARGO_PKG_VERSION")
    )
}

/// Connection settings shared by every API group.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub base_path: String,
    pub user_agent: Option<String>,
    pub client: reqwest::Client,
    /// Session id sent as `Authorization: Bearer <token>`.
    pub bearer_access_token: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
            user_agent: Some(default_user_agent()),
            client: reqwest::Client::new(),
            bearer_access_token: None,
        }
    }
}

impl Configuration {
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            ..Self::default()
        }
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_access_token = Some(token.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

impl Validate for Configuration {
    fn validate(&self) -> Result<()> {
        validate_url("base_path", &self.base_path)
    }
}
