use std::time::Duration;

use async_trait::async_trait;

use super::transport::{Transport, TransportError, TransportResponse};

/// User-Agent sent with every request
pub const USER_AGENT: &str = concat!("pushover-rs/", env!("CARGO_PKG_VERSION"));

/// Timeouts applied to the underlying reqwest client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientOptions {
    /// Total time allowed for a single request
    pub timeout: Duration,
    /// Time allowed to establish the TCP/TLS connection
    pub connect_timeout: Duration,
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Build a reqwest client tuned for talking to the Pushover API
///
/// # Features
/// - **Timeouts**: configurable request and connect timeouts
/// - **Connection pooling**: idle connections are reused across sends
/// - **Compression**: gzip responses
/// - **Security**: Rustls for TLS (no OpenSSL dependency)
pub fn build_http_client(options: &HttpClientOptions) -> Result<reqwest::Client, TransportError> {
    let client = reqwest::Client::builder()
        // Timeouts
        .timeout(options.timeout)
        .connect_timeout(options.connect_timeout)
        // Connection pooling
        .pool_max_idle_per_host(4)
        .pool_idle_timeout(Duration::from_secs(90))
        // HTTP/2 settings
        .http2_adaptive_window(true)
        .gzip(true)
        .user_agent(USER_AGENT)
        .build()?;

    Ok(client)
}

/// Transport backed by a reqwest client
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a freshly built client
    pub fn new(options: &HttpClientOptions) -> Result<Self, TransportError> {
        Ok(Self {
            client: build_http_client(options)?,
        })
    }

    /// Wraps an existing client, e.g. one shared with the rest of an application
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<TransportResponse, TransportError> {
        let resp = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        // An unreadable body is treated as empty; the status alone decides success
        let body = resp.text().await.unwrap_or_default();

        Ok(TransportResponse { status, body })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}
