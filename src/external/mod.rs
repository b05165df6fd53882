//! Outbound HTTP plumbing.

pub mod client;
pub mod transport;

pub use client::{HttpClientOptions, ReqwestTransport, build_http_client};
pub use transport::{Transport, TransportError, TransportResponse};
