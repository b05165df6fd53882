//! Service layer.
//!
//! Services hold the client logic and sit on top of the transport in
//! `external`.

pub mod notifications;

pub use notifications::PushoverClient;
