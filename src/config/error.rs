//! Errors raised while loading pushover-rs settings

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required TOML file is missing
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Sources merged but did not deserialize into `Settings`
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A loaded value is out of range or malformed
    #[error("Validation error: {field} - {message}")]
    ValidationError { field: String, message: String },

    /// `PUSHOVER_APP_ENV` holds an unknown environment name
    #[error("Unknown environment '{0}', expected one of: development, test, staging, production")]
    InvalidEnvironment(String),

    /// `PUSHOVER_CONFIG_DIR` and `PUSHOVER_CONFIG_FILE` were both set
    #[error("Mutual exclusivity error: {0}")]
    MutualExclusivityError(String),

    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found<S: Into<String>>(path: S) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity<S: Into<String>>(message: S) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}
