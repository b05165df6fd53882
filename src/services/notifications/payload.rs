//! Request body and response shapes of the `messages.json` endpoint.

use serde_json::json;

use super::credentials::Credentials;
use super::request::NotificationRequest;
use crate::models::Sound;

/// Builds the JSON body for `POST /1/messages.json`
///
/// `token`, `user`, `message`, `priority` and `sound` are always present.
/// `device` and `title` are only added when set and non-empty so the service
/// applies its own defaults (all devices, application name as title).
pub fn build_message_body(
    credentials: &Credentials,
    request: &NotificationRequest,
    sound: Sound,
) -> serde_json::Value {
    let mut body = json!({
        "token": credentials.api_key(),
        "user": credentials.user_key(),
        "message": request.message,
        "priority": request.priority.value(),
    });

    if let Some(device) = request.device.as_deref().filter(|d| !d.is_empty()) {
        body["device"] = json!(device);
    }

    if let Some(title) = request.title.as_deref().filter(|t| !t.is_empty()) {
        body["title"] = json!(title);
    }

    body["sound"] = json!(sound.as_str());

    body
}

/// Body returned by the API on both success and failure
///
/// Fields are read one by one, so a field of an unexpected type only loses
/// that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiResponse {
    /// 1 on success, anything else on failure
    pub status: Option<i64>,
    /// Request identifier assigned by the service
    pub request: Option<String>,
    pub errors: Option<Vec<String>>,
}

impl ApiResponse {
    /// Parses a response body, `None` when it is not a JSON object
    pub fn parse(body: &str) -> Option<Self> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;

        Some(Self {
            status: object.get("status").and_then(|v| v.as_i64()),
            request: object
                .get("request")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            errors: object
                .get("errors")
                .and_then(|v| serde_json::from_value::<Vec<String>>(v.clone()).ok()),
        })
    }
}
