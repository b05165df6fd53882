//! Settings for the client and the logger
//!
//! Values are merged from TOML files and `PUSHOVER_*` environment variables,
//! lowest priority first:
//! 1. `default.toml`
//! 2. `{environment}.toml`, picked by `PUSHOVER_APP_ENV`
//! 3. `local.toml`, for machine-specific keys kept out of version control
//! 4. `PUSHOVER_*` variables, `__` between nested keys
//!
//! Loading is opt-in: a [`PushoverClient`](crate::PushoverClient) built with
//! `PushoverClient::new` never touches files or the environment.

pub mod environment;
pub mod error;
pub mod loader;
pub mod settings;
pub mod validation;

pub use environment::Environment;
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use settings::{ConsoleSettings, FileSettings, LoggerSettings, PushoverSettings, Settings};
