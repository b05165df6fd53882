//! Pushover notification client.
//!
//! A request is validated, turned into a JSON body and posted to the
//! Pushover `messages.json` endpoint through a [`Transport`](crate::external::Transport),
//! retrying a bounded number of times. The result is a [`NotificationOutcome`].

mod credentials;
mod outcome;
mod payload;
mod pushover_client;
mod request;
mod retry;

pub use credentials::Credentials;
pub use outcome::{FailureReason, NotificationOutcome};
pub use payload::{ApiResponse, build_message_body};
pub use pushover_client::{PUSHOVER_API_URL, PushoverClient};
pub use request::{MAX_MESSAGE_LEN, MAX_TITLE_LEN, NotificationRequest};
pub use retry::{MAX_ATTEMPTS, RETRY_INTERVAL, RetryPolicy};
