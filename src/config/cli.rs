use crate::config::toml_config::{ClientConfig, LoggingConfig, ServerConfig};
use crate::utils::error::{ClientError, Result};
use crate::utils::output::OutputFormat;
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::{Parser, Subcommand};
use uuid::Uuid;

pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Parser)]
#[command(name = "geoengine")]
#[command(about = "Command line client for the Geo Engine API")]
pub struct CliConfig {
    /// TOML client configuration; flags override its values.
    #[arg(long, short)]
    pub config: Option<String>,

    #[arg(long, env = "GEOENGINE_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long, env = "GEOENGINE_SESSION_TOKEN")]
    pub session_token: Option<String>,

    #[arg(long, default_value = "json", help = "Output format: csv, tsv or json")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Server version and build information.
    Info,
    /// Log in and print the session token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GEOENGINE_PASSWORD")]
        password: String,
    },
    /// Start an anonymous session and print its token.
    Anonymous,
    Datasets {
        #[arg(long, default_value = "20")]
        limit: u32,
        #[arg(long, default_value = "0")]
        offset: u32,
        #[arg(long)]
        filter: Option<String>,
    },
    Projects {
        #[arg(long, default_value = "20")]
        limit: u32,
        #[arg(long, default_value = "0")]
        offset: u32,
    },
    Tasks {
        #[arg(long, default_value = "20")]
        limit: u32,
        #[arg(long, default_value = "0")]
        offset: u32,
    },
    TaskStatus {
        task: Uuid,
        /// Poll until the task finishes, at most this many seconds.
        #[arg(long)]
        wait: Option<u64>,
    },
    /// Spatial reference specification, e.g. `EPSG:4326`.
    Srs { srs: String },
    /// Symbols exported by the API groups.
    Surface,
}

impl Command {
    fn page_limit(&self) -> Option<u32> {
        match self {
            Command::Datasets { limit, .. }
            | Command::Projects { limit, .. }
            | Command::Tasks { limit, .. } => Some(*limit),
            _ => None,
        }
    }
}

impl CliConfig {
    /// Merges the optional config file with the command line flags.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig {
                server: ServerConfig {
                    base_url: String::new(),
                    timeout_seconds: None,
                    user_agent: None,
                },
                auth: Default::default(),
                logging: None,
            },
        };

        if let Some(base_url) = &self.base_url {
            config.server.base_url = base_url.clone();
        }
        if config.server.base_url.is_empty() {
            config.server.base_url = crate::core::configuration::DEFAULT_BASE_PATH.to_string();
        }

        if let Some(token) = &self.session_token {
            config.auth = Default::default();
            config.auth.session_token = Some(token.clone());
        }
        if self.verbose {
            let logging = config.logging.get_or_insert(LoggingConfig {
                level: None,
                json: false,
            });
            logging.level = Some("debug".to_string());
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        if let Some(limit) = self.command.page_limit() {
            validate_range("limit", limit, 1, MAX_PAGE_SIZE)?;
        }
        if let Some(path) = &self.config {
            if !std::path::Path::new(path).is_file() {
                return Err(ClientError::InvalidConfigValueError {
                    field: "config".to_string(),
                    value: path.clone(),
                    reason: "Config file not found".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datasets_command() {
        let cli = CliConfig::try_parse_from([
            "geoengine",
            "--base-url",
            "http://localhost:3030/api",
            "--format",
            "csv",
            "datasets",
            "--limit",
            "5",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Csv);
        assert!(matches!(cli.command, Command::Datasets { limit: 5, offset: 0, .. }));
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_limit_out_of_range() {
        let cli = CliConfig::try_parse_from(["geoengine", "tasks", "--limit", "500"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::try_parse_from([
            "geoengine",
            "--session-token",
            "token-123",
            "--verbose",
            "info",
        ])
        .unwrap();

        let config = cli.client_config().unwrap();
        assert_eq!(config.server.base_url, "http://localhost:3030/api");
        assert_eq!(config.auth.session_token.as_deref(), Some("token-123"));
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_task_status_requires_uuid() {
        assert!(CliConfig::try_parse_from(["geoengine", "task-status", "not-a-uuid"]).is_err());
    }
}
