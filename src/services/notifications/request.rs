//! Caller-facing notification request and its validation.

use validator::{Validate, ValidationErrors};

use crate::error::{PushoverError, PushoverResult};
use crate::models::{Priority, Sound};

/// Maximum message length accepted by the API, in characters
pub const MAX_MESSAGE_LEN: usize = 1024;

/// Maximum title length accepted by the API, in characters
pub const MAX_TITLE_LEN: usize = 250;

/// A single notification to deliver.
///
/// # Example
/// ```
/// use pushover_rs::models::Priority;
/// use pushover_rs::services::notifications::NotificationRequest;
///
/// let request = NotificationRequest::new("Backup finished")
///     .title("nightly-backup")
///     .device("phone")
///     .sound("magic")
///     .priority(Priority::Low);
/// assert_eq!(request.sound, "magic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NotificationRequest {
    /// Message body
    #[validate(length(min = 1, max = 1024, message = "Message must be 1-1024 characters"))]
    pub message: String,

    /// Title, the service uses the application name when absent
    #[validate(length(max = 250, message = "Title must be at most 250 characters"))]
    pub title: Option<String>,

    /// Target device name, all of the user's devices when absent
    pub device: Option<String>,

    /// Sound name, checked against [`Sound`] before sending
    pub sound: String,

    pub priority: Priority,
}

impl NotificationRequest {
    /// Creates a request with the default sound (`persistent`) and normal priority
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            device: None,
            sound: Sound::default().as_str().to_string(),
            priority: Priority::default(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    pub fn sound(mut self, sound: impl AsRef<str>) -> Self {
        self.sound = sound.as_ref().to_string();
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Checks everything that must hold before the request may go on the wire
    ///
    /// Checks run in order: sound, priority, then field lengths. Returns the
    /// parsed sound on success.
    ///
    /// # Errors
    /// - `InvalidArgument` for an unknown sound or a length violation
    /// - `Unsupported` for emergency priority
    pub fn check(&self) -> PushoverResult<Sound> {
        let sound: Sound = self.sound.parse()?;

        if self.priority == Priority::Emergency {
            return Err(PushoverError::unsupported(
                "emergency priority notifications",
            ));
        }

        self.validate().map_err(|e| validation_to_error(&e))?;

        Ok(sound)
    }
}

/// Converts the first failing field (alphabetical) into an `InvalidArgument`
fn validation_to_error(errors: &ValidationErrors) -> PushoverError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    match fields.first() {
        Some((field, field_errors)) => {
            let reason = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "invalid value".to_string());
            PushoverError::invalid_argument(field.to_string(), reason)
        }
        None => PushoverError::invalid_argument("request", errors.to_string()),
    }
}
