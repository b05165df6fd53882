//! Configuration validation logic
//!
//! This module provides validation methods for all configuration structures
//! to ensure configuration values are within acceptable ranges and formats.

use crate::config::error::ConfigError;
use crate::config::settings::{FileSettings, LoggerSettings, PushoverSettings, Settings};

/// Valid log levels
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Valid log formats
const VALID_LOG_FORMATS: &[&str] = &["full", "compact", "json"];

impl PushoverSettings {
    /// Validate Pushover client configuration
    ///
    /// # Validation Rules
    /// - User key and API key must not be blank
    /// - API URL must use http or https
    /// - Timeouts must be greater than 0
    /// - At least one attempt must be allowed
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.user_key.trim().is_empty() {
            return Err(ConfigError::validation(
                "pushover.user_key",
                "User key is required. Set it in the config file or via PUSHOVER_PUSHOVER__USER_KEY.",
            ));
        }

        if self.api_key.trim().is_empty() {
            return Err(ConfigError::validation(
                "pushover.api_key",
                "API key is required. Set it in the config file or via PUSHOVER_PUSHOVER__API_KEY.",
            ));
        }

        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(ConfigError::validation(
                "pushover.api_url",
                "API URL must use the http or https scheme.",
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::validation(
                "pushover.timeout_secs",
                "Request timeout must be greater than 0 seconds.",
            ));
        }

        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::validation(
                "pushover.connect_timeout_secs",
                "Connect timeout must be greater than 0 seconds.",
            ));
        }

        if self.max_attempts == 0 {
            return Err(ConfigError::validation(
                "pushover.max_attempts",
                "At least one attempt is required.",
            ));
        }

        Ok(())
    }
}

impl FileSettings {
    /// Validate file settings
    fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled && self.path.trim().is_empty() {
            return Err(ConfigError::validation(
                "logger.file.path",
                "Log file path cannot be empty when file logging is enabled.",
            ));
        }

        if !VALID_LOG_FORMATS.contains(&self.format.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.file.format".to_string(),
                message: format!(
                    "Invalid log format '{}'. Valid formats are: {}",
                    self.format,
                    VALID_LOG_FORMATS.join(", ")
                ),
            });
        }

        Ok(())
    }
}

impl LoggerSettings {
    /// Validate logger settings
    ///
    /// # Validation Rules
    /// - Log level must be one of: trace, debug, info, warn, error
    /// - If file logging is enabled, path must not be empty
    /// - Log format must be one of: full, compact, json
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.level.to_lowercase().as_str()) {
            return Err(ConfigError::ValidationError {
                field: "logger.level".to_string(),
                message: format!(
                    "Invalid log level '{}'. Valid levels are: {}",
                    self.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        self.file.validate()?;

        Ok(())
    }
}

impl Settings {
    /// Validate all configuration settings
    ///
    /// Returns the first validation error encountered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pushover.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_pushover() -> PushoverSettings {
        PushoverSettings {
            user_key: "uQiRzpo4DXghDmr9QzzfQu27cmVRsG".to_string(),
            api_key: "azGDORePK8gMaC0QOYAMyEEuzJnyUi".to_string(),
            ..Default::default()
        }
    }

    fn assert_field(result: Result<(), ConfigError>, expected: &str) {
        let err = result.unwrap_err();
        assert!(
            matches!(err, ConfigError::ValidationError { ref field, .. } if field == expected),
            "unexpected error: {}",
            err
        );
    }

    // ========================================================================
    // PushoverSettings validation tests
    // ========================================================================

    #[test]
    fn test_pushover_settings_valid() {
        assert!(valid_pushover().validate().is_ok());
    }

    #[test]
    fn test_pushover_settings_missing_user_key() {
        let config = PushoverSettings {
            user_key: "  ".to_string(),
            ..valid_pushover()
        };
        assert_field(config.validate(), "pushover.user_key");
    }

    #[test]
    fn test_pushover_settings_missing_api_key() {
        let config = PushoverSettings {
            api_key: String::new(),
            ..valid_pushover()
        };
        assert_field(config.validate(), "pushover.api_key");
    }

    #[test]
    fn test_pushover_settings_invalid_url_scheme() {
        let config = PushoverSettings {
            api_url: "ftp://api.pushover.net/1/messages.json".to_string(),
            ..valid_pushover()
        };
        assert_field(config.validate(), "pushover.api_url");
    }

    #[test]
    fn test_pushover_settings_zero_timeouts() {
        let config = PushoverSettings {
            timeout_secs: 0,
            ..valid_pushover()
        };
        assert_field(config.validate(), "pushover.timeout_secs");

        let config = PushoverSettings {
            connect_timeout_secs: 0,
            ..valid_pushover()
        };
        assert_field(config.validate(), "pushover.connect_timeout_secs");
    }

    #[test]
    fn test_pushover_settings_zero_attempts() {
        let config = PushoverSettings {
            max_attempts: 0,
            ..valid_pushover()
        };
        assert_field(config.validate(), "pushover.max_attempts");
    }

    #[test]
    fn test_pushover_settings_zero_interval_ok() {
        let config = PushoverSettings {
            retry_interval_ms: 0,
            ..valid_pushover()
        };
        assert!(config.validate().is_ok());
    }

    // ========================================================================
    // LoggerSettings validation tests
    // ========================================================================

    #[test]
    fn test_logger_settings_valid_levels() {
        for level in ["trace", "debug", "info", "warn", "error", "INFO"] {
            let config = LoggerSettings {
                level: level.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "level {} should be valid", level);
        }
    }

    #[test]
    fn test_logger_settings_invalid_level() {
        let config = LoggerSettings {
            level: "verbose".to_string(),
            ..Default::default()
        };
        assert_field(config.validate(), "logger.level");
    }

    #[test]
    fn test_logger_settings_file_enabled_empty_path() {
        let config = LoggerSettings {
            file: FileSettings {
                enabled: true,
                path: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_field(config.validate(), "logger.file.path");
    }

    #[test]
    fn test_logger_settings_file_disabled_empty_path_ok() {
        let config = LoggerSettings {
            file: FileSettings {
                enabled: false,
                path: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logger_settings_invalid_format() {
        let config = LoggerSettings {
            file: FileSettings {
                format: "xml".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_field(config.validate(), "logger.file.format");
    }

    // ========================================================================
    // Settings validation tests
    // ========================================================================

    #[test]
    fn test_settings_valid() {
        let settings = Settings {
            pushover: valid_pushover(),
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_default_requires_keys() {
        assert_field(Settings::default().validate(), "pushover.user_key");
    }
}
