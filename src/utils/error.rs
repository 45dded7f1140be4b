use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Zip archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// The server answered with its `{ "error", "message" }` body.
    #[error("{error}: {message}")]
    ApiError {
        status: u16,
        error: String,
        message: String,
    },

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration '{field}'")]
    MissingConfigError { field: String },

    #[error("Symbol '{symbol}' exported by both {first} and {second}")]
    SymbolCollision {
        symbol: String,
        first: String,
        second: String,
    },

    #[error("Task {task_id} did not finish within {elapsed:?}")]
    TaskTimeout { task_id: Uuid, elapsed: Duration },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code of the `geoengine` binary.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ClientError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::TaskTimeout { .. } => ErrorSeverity::Medium,
            ClientError::HttpError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            ClientError::UnexpectedStatus { status, .. } | ClientError::ApiError { status, .. }
                if *status >= 500 =>
            {
                ErrorSeverity::Medium
            }
            ClientError::ApiError { .. }
            | ClientError::UnexpectedStatus { .. }
            | ClientError::HttpError(_)
            | ClientError::SerializationError(_)
            | ClientError::ZipError(_)
            | ClientError::CsvError(_) => ErrorSeverity::High,
            ClientError::ConfigValidationError { .. }
            | ClientError::InvalidConfigValueError { .. }
            | ClientError::MissingConfigError { .. }
            | ClientError::UrlError(_)
            | ClientError::SymbolCollision { .. }
            | ClientError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::HttpError(e) if e.is_connect() => {
                "Could not reach the Geo Engine server".to_string()
            }
            ClientError::HttpError(e) if e.is_timeout() => {
                "The Geo Engine server did not answer in time".to_string()
            }
            ClientError::ApiError { status: 401, .. } => {
                "Not authenticated, log in or provide a session token".to_string()
            }
            ClientError::ApiError { error, message, .. } => {
                format!("Server rejected the request ({}): {}", error, message)
            }
            ClientError::ConfigValidationError { field, .. }
            | ClientError::InvalidConfigValueError { field, .. }
            | ClientError::MissingConfigError { field } => {
                format!("Please check the configuration value '{}'", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
