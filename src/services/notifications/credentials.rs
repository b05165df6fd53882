use crate::error::{PushoverError, PushoverResult};

/// User key and application API key issued by Pushover.
///
/// Immutable once built. `Debug` output never shows the keys.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user_key: String,
    api_key: String,
}

impl Credentials {
    /// Validates and stores both keys
    ///
    /// # Errors
    /// `InvalidArgument` when either key is empty or only whitespace
    pub fn new(user_key: impl Into<String>, api_key: impl Into<String>) -> PushoverResult<Self> {
        let user_key = user_key.into();
        let api_key = api_key.into();

        if api_key.trim().is_empty() {
            return Err(PushoverError::invalid_argument(
                "api_key",
                "API key cannot be empty",
            ));
        }
        if user_key.trim().is_empty() {
            return Err(PushoverError::invalid_argument(
                "user_key",
                "User key cannot be empty",
            ));
        }

        Ok(Self { user_key, api_key })
    }

    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_key", &"<redacted>")
            .field("api_key", &"<redacted>")
            .finish()
    }
}
