use crate::core::configuration::{default_user_agent, Configuration};
use crate::models::UserCredentials;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_required_field, validate_url,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub session_token: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub anonymous: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub json: bool,
}

/// How a client built from the file authenticates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMode {
    Token(String),
    Credentials(UserCredentials),
    Anonymous,
    Unauthenticated,
}

impl AuthConfig {
    pub fn mode(&self) -> AuthMode {
        if let Some(token) = &self.session_token {
            return AuthMode::Token(token.clone());
        }
        if let (Some(email), Some(password)) = (&self.email, &self.password) {
            return AuthMode::Credentials(UserCredentials {
                email: email.clone(),
                password: password.clone(),
            });
        }
        if self.anonymous {
            AuthMode::Anonymous
        } else {
            AuthMode::Unauthenticated
        }
    }

    fn validate_auth(&self) -> Result<()> {
        let configured = [
            self.session_token.is_some(),
            self.email.is_some() || self.password.is_some(),
            self.anonymous,
        ]
        .iter()
        .filter(|set| **set)
        .count();

        if configured > 1 {
            return Err(ClientError::ConfigValidationError {
                field: "auth".to_string(),
                message: "Use only one of session_token, email/password or anonymous".to_string(),
            });
        }

        if self.email.is_none() && self.password.is_none() {
            return Ok(());
        }
        let email = validate_required_field("auth.email", &self.email)?;
        let password = validate_required_field("auth.password", &self.password)?;
        validate_non_empty_string("auth.email", email)?;
        validate_non_empty_string("auth.password", password)
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.server
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().map(|l| l.json).unwrap_or(false)
    }

    /// Connection settings without the auth step; a configured token is applied directly.
    pub fn to_configuration(&self) -> Result<Configuration> {
        let http = reqwest::Client::builder().timeout(self.timeout()).build()?;

        let mut configuration = Configuration::new(self.server.base_url.clone())
            .with_client(http)
            .with_user_agent(
                self.server
                    .user_agent
                    .clone()
                    .unwrap_or_else(default_user_agent),
            );
        if let AuthMode::Token(token) = self.auth.mode() {
            configuration = configuration.with_session_token(token);
        }
        Ok(configuration)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("server.base_url", &self.server.base_url)?;

        if let Some(timeout) = self.server.timeout_seconds {
            validate_positive_number("server.timeout_seconds", timeout, 1)?;
        }

        if let Some(user_agent) = &self.server.user_agent {
            validate_non_empty_string("server.user_agent", user_agent)?;
        }

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ClientError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        self.auth.validate_auth()
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
