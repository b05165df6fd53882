//! Layered settings loader
//!
//! Sources, lowest priority first:
//! 1. `default.toml` (required)
//! 2. `{environment}.toml` (optional)
//! 3. `local.toml` (optional, not committed)
//! 4. `PUSHOVER_*` environment variables
//!
//! A single file can replace the three TOML layers via `PUSHOVER_CONFIG_FILE`.

use std::path::{Path, PathBuf};

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "PUSHOVER_CONFIG_DIR";

/// Environment variable for specific configuration file
const CONFIG_FILE_ENV: &str = "PUSHOVER_CONFIG_FILE";

const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "PUSHOVER";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

#[derive(Debug)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    /// When set, layered loading is skipped
    config_file: Option<PathBuf>,
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a loader from `PUSHOVER_CONFIG_DIR`, `PUSHOVER_CONFIG_FILE`
    /// and `PUSHOVER_APP_ENV`
    ///
    /// # Errors
    ///
    /// Returns an error if both `PUSHOVER_CONFIG_DIR` and `PUSHOVER_CONFIG_FILE`
    /// are set, as they are mutually exclusive.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = std::env::var(CONFIG_DIR_ENV).ok().map(PathBuf::from);
        let config_file = std::env::var(CONFIG_FILE_ENV).ok().map(PathBuf::from);

        if config_file.is_some() && config_dir.is_some() {
            return Err(ConfigError::mutual_exclusivity(
                "PUSHOVER_CONFIG_DIR and PUSHOVER_CONFIG_FILE cannot both be set. \
                 Use PUSHOVER_CONFIG_DIR for layered configuration or \
                 PUSHOVER_CONFIG_FILE for a single configuration file.",
            ));
        }

        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR)),
            config_file,
            environment: AppEnvironment::from_env(),
        })
    }

    /// Layered loading from an explicit directory
    pub fn from_dir(config_dir: impl Into<PathBuf>, environment: AppEnvironment) -> Self {
        Self {
            config_dir: config_dir.into(),
            config_file: None,
            environment,
        }
    }

    /// Single-file loading from an explicit path
    pub fn from_file(config_file: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            config_file: Some(config_file.into()),
            environment: AppEnvironment::default(),
        }
    }

    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Load, deserialize and validate settings from all sources
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `default.toml` (or the single config file) is not found
    /// - Configuration parsing fails
    /// - Configuration validation fails
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        tracing::debug!(
            environment = %self.environment,
            config_dir = %self.config_dir.display(),
            "Configuration loaded"
        );

        Ok(settings)
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let builder = Config::builder();

        let builder = match self.config_file {
            Some(ref config_file) => Self::add_file_source(builder, config_file, true)?,
            None => self.build_layered_config(builder)?,
        };

        // Environment variables always win
        // PUSHOVER_PUSHOVER__MAX_ATTEMPTS -> pushover.max_attempts
        let builder = Self::add_env_source(builder);

        builder.build().map_err(ConfigError::from)
    }

    fn build_layered_config(
        &self,
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let default_path = self.config_dir.join("default.toml");
        let builder = Self::add_file_source(builder, &default_path, true)?;

        let env_path = self.config_dir.join(self.environment.config_file_name());
        let builder = Self::add_file_source(builder, &env_path, false)?;

        let local_path = self.config_dir.join("local.toml");
        Self::add_file_source(builder, &local_path, false)
    }

    fn add_file_source(
        builder: ConfigBuilder<DefaultState>,
        path: &Path,
        required: bool,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if required && !path.exists() {
            return Err(ConfigError::file_not_found(format!(
                "Required configuration file not found: {}",
                path.display()
            )));
        }

        Ok(builder.add_source(
            File::new(&path.to_string_lossy(), FileFormat::Toml).required(required),
        ))
    }

    /// `PUSHOVER_` prefixed variables, `__` separating nested keys
    ///
    /// Examples:
    /// - `PUSHOVER_PUSHOVER__API_KEY` -> `pushover.api_key`
    /// - `PUSHOVER_LOGGER__LEVEL` -> `logger.level`
    fn add_env_source(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
        builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Tests touching process environment variables run one at a time
    static TEST_MUTEX: Mutex<()> = Mutex::new(());

    const DEFAULT_CONFIG: &str = r#"
[pushover]
user_key = "uQiRzpo4DXghDmr9QzzfQu27cmVRsG"
api_key = "azGDORePK8gMaC0QOYAMyEEuzJnyUi"
max_attempts = 3
retry_interval_ms = 1000

[logger]
level = "info"

[logger.console]
enabled = true
colored = true

[logger.file]
enabled = false
"#;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    /// Sets/removes variables and restores the originals on drop
    struct EnvGuard {
        vars_to_restore: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn new() -> Self {
            Self {
                vars_to_restore: Vec::new(),
            }
        }

        fn set(&mut self, key: &str, value: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::set_var(key, value);
            }
        }

        fn remove(&mut self, key: &str) {
            self.vars_to_restore
                .push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, original_value) in self.vars_to_restore.iter().rev() {
                unsafe {
                    match original_value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                }
            }
        }
    }

    fn clear_loader_env(env: &mut EnvGuard) {
        env.remove(CONFIG_DIR_ENV);
        env.remove(CONFIG_FILE_ENV);
        env.remove(AppEnvironment::ENV_VAR);
        env.remove("PUSHOVER_PUSHOVER__MAX_ATTEMPTS");
        env.remove("PUSHOVER_PUSHOVER__API_KEY");
    }

    #[test]
    fn test_config_loader_new_default() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.config_dir(), Path::new("config"));
        assert!(loader.config_file.is_none());
        assert_eq!(loader.environment(), AppEnvironment::Development);
    }

    #[test]
    fn test_config_loader_mutual_exclusivity_error() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        env.set(CONFIG_DIR_ENV, "/custom/config");
        env.set(CONFIG_FILE_ENV, "/path/to/config.toml");

        match ConfigLoader::new() {
            Err(ConfigError::MutualExclusivityError(msg)) => {
                assert!(msg.contains("PUSHOVER_CONFIG_DIR"));
                assert!(msg.contains("PUSHOVER_CONFIG_FILE"));
            }
            other => panic!("Expected MutualExclusivityError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_loader_environment_from_env() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        env.set(AppEnvironment::ENV_VAR, "production");

        let loader = ConfigLoader::new().expect("Should create loader");
        assert_eq!(loader.environment(), AppEnvironment::Production);
    }

    #[test]
    fn test_load_missing_default_toml() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        let temp_dir = setup_config_dir(&[]);
        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Development);

        match loader.load() {
            Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("default.toml")),
            other => panic!("Expected FileNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_default_toml_only() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_CONFIG)]);
        env.set(CONFIG_DIR_ENV, temp_dir.path().to_str().unwrap());

        let settings = ConfigLoader::new()
            .expect("Should create loader")
            .load()
            .expect("Should load settings");

        assert_eq!(settings.pushover.user_key, "uQiRzpo4DXghDmr9QzzfQu27cmVRsG");
        assert_eq!(settings.pushover.max_attempts, 3);
        assert_eq!(
            settings.pushover.api_url,
            "https://api.pushover.net/1/messages.json"
        );
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn test_load_full_precedence_chain() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        let production_config = r#"
[pushover]
max_attempts = 5
retry_interval_ms = 2000
timeout_secs = 15

[logger]
level = "warn"
"#;

        let local_config = r#"
[pushover]
max_attempts = 7
retry_interval_ms = 500
"#;

        let temp_dir = setup_config_dir(&[
            ("default.toml", DEFAULT_CONFIG),
            ("production.toml", production_config),
            ("local.toml", local_config),
        ]);

        env.set("PUSHOVER_PUSHOVER__MAX_ATTEMPTS", "9");

        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Production);
        let settings = loader.load().expect("Should load settings");

        // Environment variable has highest priority
        assert_eq!(settings.pushover.max_attempts, 9);
        // local.toml overrides production.toml
        assert_eq!(settings.pushover.retry_interval_ms, 500);
        // production.toml overrides default.toml
        assert_eq!(settings.pushover.timeout_secs, 15);
        assert_eq!(settings.logger.level, "warn");
        // default.toml provides base values
        assert_eq!(settings.pushover.api_key, "azGDORePK8gMaC0QOYAMyEEuzJnyUi");
    }

    #[test]
    fn test_load_single_file_mode() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        let single_config = r#"
[pushover]
user_key = "single-user"
api_key = "single-api"
api_url = "http://127.0.0.1:9000/1/messages.json"
trailing_delay = true
"#;

        let temp_dir = setup_config_dir(&[("single.toml", single_config)]);
        env.set(
            CONFIG_FILE_ENV,
            temp_dir.path().join("single.toml").to_str().unwrap(),
        );

        let settings = ConfigLoader::new()
            .expect("Should create loader")
            .load()
            .expect("Should load settings");

        assert_eq!(settings.pushover.user_key, "single-user");
        assert_eq!(
            settings.pushover.api_url,
            "http://127.0.0.1:9000/1/messages.json"
        );
        assert!(settings.pushover.trailing_delay);
    }

    #[test]
    fn test_optional_files_not_required() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        let temp_dir = setup_config_dir(&[("default.toml", DEFAULT_CONFIG)]);

        // staging.toml and local.toml don't exist
        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Staging);
        assert!(loader.load().is_ok());
    }

    #[test]
    fn test_load_rejects_missing_keys() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        let temp_dir = setup_config_dir(&[("default.toml", "[logger]\nlevel = \"info\"\n")]);
        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Development);

        assert!(matches!(
            loader.load(),
            Err(ConfigError::ValidationError { field, .. }) if field == "pushover.user_key"
        ));
    }

    #[test]
    fn test_api_key_from_env_only() {
        let _guard = TEST_MUTEX.lock().unwrap();
        let mut env = EnvGuard::new();
        clear_loader_env(&mut env);

        let without_api_key = r#"
[pushover]
user_key = "file-user"
"#;
        let temp_dir = setup_config_dir(&[("default.toml", without_api_key)]);
        env.set("PUSHOVER_PUSHOVER__API_KEY", "env-api-key");

        let loader = ConfigLoader::from_dir(temp_dir.path(), AppEnvironment::Development);
        let settings = loader.load().expect("Should load settings");

        assert_eq!(settings.pushover.api_key, "env-api-key");
        assert_eq!(settings.pushover.user_key, "file-user");
    }

    #[test]
    fn test_from_file_missing() {
        let loader = ConfigLoader::from_file("/nonexistent/pushover.toml");
        assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
    }
}
