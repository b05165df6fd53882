use thiserror::Error;

use crate::external::TransportError;

/// Errors raised synchronously by the Pushover client.
///
/// Every variant except `Transport` is produced before any
/// network I/O happens. Failures of individual delivery attempts are not
/// errors: they are captured into
/// [`NotificationOutcome`](crate::services::notifications::NotificationOutcome).
#[derive(Error, Debug)]
pub enum PushoverError {
    /// Caller input failed validation (blank keys, unknown sound, unknown priority, length limits)
    #[error("Invalid argument {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// Requested feature is not implemented by this client
    #[error("Unsupported: {feature}")]
    Unsupported { feature: String },

    /// The HTTP transport could not be constructed
    #[error("Transport setup failed")]
    Transport {
        #[from]
        source: TransportError,
    },
}

impl PushoverError {
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::Unsupported {
            feature: feature.into(),
        }
    }
}

/// Type alias for Result with PushoverError to simplify function signatures
pub type PushoverResult<T> = Result<T, PushoverError>;
