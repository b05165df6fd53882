//! HTTP transport seam used by the notification client.
//!
//! The client only needs "POST this JSON, give me status and body", so that
//! is all the trait exposes. Tests substitute an in-memory implementation.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that prevent a response from being obtained
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error reported by the reqwest client (connect, DNS, TLS, timeout, ...)
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Connection-level failure reported by a non-reqwest transport
    #[error("{0}")]
    Connection(String),
}

impl TransportError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}

/// Status and raw body of an HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can POST a JSON body and hand back the response.
///
/// An `Err` means no response was obtained at all. Non-2xx statuses are
/// returned as `Ok` so the caller can inspect the body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError>;

    /// Transport name for logging
    fn name(&self) -> &'static str;
}
