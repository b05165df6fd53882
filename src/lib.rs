//! pushover-rs
//!
//! Async client for the [Pushover](https://pushover.net/api) notification API.
//! Requests are validated locally, posted as JSON and retried a bounded
//! number of times before a [`NotificationOutcome`] is returned.

pub mod config;
pub mod error;
pub mod external;
pub mod logger;
pub mod models;
pub mod services;

pub use error::{PushoverError, PushoverResult};
pub use models::{Priority, Sound};
pub use services::PushoverClient;
pub use services::notifications::{
    Credentials, FailureReason, NotificationOutcome, NotificationRequest, RetryPolicy,
};

/// Crate version, also sent in the HTTP `User-Agent`
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the global logger from loaded settings
///
/// # Errors
/// Returns an error if the logger settings are invalid, the log file cannot
/// be opened, or a global subscriber is already installed.
pub fn init_logger_from_settings(
    settings: &config::Settings,
) -> anyhow::Result<logger::LogLevelHandle> {
    let logger_config = settings.logger.clone().into_logger_config()?;
    logger::init_logger(logger_config)
}
