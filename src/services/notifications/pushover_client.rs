//! Pushover API client with bounded retry.
//!
//! Pushover API Reference: https://pushover.net/api

use std::sync::Arc;
use std::time::Duration;

use super::credentials::Credentials;
use super::outcome::{FailureReason, NotificationOutcome};
use super::payload::{ApiResponse, build_message_body};
use super::request::NotificationRequest;
use super::retry::RetryPolicy;
use crate::config::PushoverSettings;
use crate::error::PushoverResult;
use crate::external::{HttpClientOptions, ReqwestTransport, Transport, TransportError};

/// Endpoint for sending messages
pub const PUSHOVER_API_URL: &str = "https://api.pushover.net/1/messages.json";

/// Client for the Pushover `messages.json` endpoint
///
/// Holds read-only state only, so a single instance can be cloned and used
/// from many tasks at once.
///
/// # Example
/// ```ignore
/// let client = PushoverClient::new("user-key", "api-key")?;
/// let outcome = client
///     .send(&NotificationRequest::new("Deploy finished").sound("magic"))
///     .await?;
/// if !outcome.is_success() {
///     tracing::warn!(reason = %outcome, "Notification not delivered");
/// }
/// ```
#[derive(Clone)]
pub struct PushoverClient {
    credentials: Credentials,
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
    api_url: String,
}

impl PushoverClient {
    /// Creates a client using the reqwest transport with default timeouts
    ///
    /// # Errors
    /// `InvalidArgument` when either key is blank, `Transport` when the
    /// HTTP client cannot be built
    pub fn new(user_key: impl Into<String>, api_key: impl Into<String>) -> PushoverResult<Self> {
        let credentials = Credentials::new(user_key, api_key)?;
        let transport = ReqwestTransport::new(&HttpClientOptions::default())?;

        Ok(Self::with_transport(
            credentials,
            Arc::new(transport),
            RetryPolicy::default(),
        ))
    }

    /// Creates a client over any transport
    pub fn with_transport(
        credentials: Credentials,
        transport: Arc<dyn Transport>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            credentials,
            transport,
            retry,
            api_url: PUSHOVER_API_URL.to_string(),
        }
    }

    /// Creates a client from loaded configuration
    pub fn from_settings(settings: &PushoverSettings) -> PushoverResult<Self> {
        let credentials = Credentials::new(settings.user_key.as_str(), settings.api_key.as_str())?;
        let options = HttpClientOptions {
            timeout: Duration::from_secs(settings.timeout_secs),
            connect_timeout: Duration::from_secs(settings.connect_timeout_secs),
        };
        let transport = ReqwestTransport::new(&options)?;
        let retry = RetryPolicy::new(
            settings.max_attempts,
            Duration::from_millis(settings.retry_interval_ms),
        )
        .with_trailing_delay(settings.trailing_delay);

        Ok(Self::with_transport(credentials, Arc::new(transport), retry).with_api_url(&settings.api_url))
    }

    /// Overrides the endpoint, e.g. for a proxy or a local test server
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Sends a notification, retrying failed attempts
    ///
    /// The request is validated before any network I/O. Each attempt that
    /// does not get a 2xx response is followed by a wait of
    /// `retry.interval`; a 2xx response returns immediately.
    ///
    /// # Returns
    /// `Delivered` on the first 2xx response, otherwise `Failed` carrying the
    /// reason recorded for the last attempt
    ///
    /// # Errors
    /// - `InvalidArgument` for an unknown sound or a length violation
    /// - `Unsupported` for emergency priority
    pub async fn send(&self, request: &NotificationRequest) -> PushoverResult<NotificationOutcome> {
        let sound = request.check()?;
        let body = build_message_body(&self.credentials, request, sound);
        let max_attempts = self.retry.attempts();

        let mut last_failure = None;

        for attempt in 1..=max_attempts {
            tracing::debug!(
                attempt,
                max_attempts,
                priority = %request.priority,
                sound = %sound,
                transport = self.transport.name(),
                "Sending Pushover notification"
            );

            match self.attempt(&body).await {
                Ok(request_id) => {
                    tracing::info!(
                        attempt,
                        request_id = request_id.as_deref().unwrap_or("-"),
                        "Pushover notification delivered"
                    );
                    return Ok(NotificationOutcome::Delivered {
                        attempts: attempt,
                        request_id,
                    });
                }
                Err(reason) => {
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        reason = %reason.message(),
                        "Pushover notification attempt failed"
                    );
                    last_failure = Some(reason);
                }
            }

            if self.retry.should_wait_after(attempt) {
                tokio::time::sleep(self.retry.interval).await;
            }
        }

        let reason = last_failure.unwrap_or_else(|| FailureReason::Transport {
            description: "no attempt was made".to_string(),
        });
        tracing::error!(
            attempts = max_attempts,
            reason = %reason.message(),
            "Pushover notification not delivered"
        );

        Ok(NotificationOutcome::Failed {
            attempts: max_attempts,
            reason,
        })
    }

    /// One POST; `Ok` carries the service's request id on a 2xx response
    async fn attempt(&self, body: &serde_json::Value) -> Result<Option<String>, FailureReason> {
        let response = self
            .transport
            .post_json(&self.api_url, body)
            .await
            .map_err(|e: TransportError| FailureReason::Transport {
                description: e.to_string(),
            })?;

        let parsed = ApiResponse::parse(&response.body);

        if response.is_success() {
            return Ok(parsed.and_then(|r| r.request));
        }

        Err(FailureReason::Rejected {
            status: response.status,
            errors: parsed.and_then(|r| r.errors),
        })
    }
}

impl std::fmt::Debug for PushoverClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PushoverClient")
            .field("credentials", &self.credentials)
            .field("transport", &self.transport.name())
            .field("retry", &self.retry)
            .field("api_url", &self.api_url)
            .finish()
    }
}
