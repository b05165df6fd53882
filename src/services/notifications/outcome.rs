//! Result of a send call.

use serde::{Deserialize, Serialize};

/// Why the last delivery attempt failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureReason {
    /// No response was obtained (connection refused, DNS, timeout, ...)
    Transport { description: String },
    /// The service answered with a non-2xx status
    Rejected {
        status: u16,
        /// Error list from the response body, `None` when it could not be read
        errors: Option<Vec<String>>,
    },
}

impl FailureReason {
    /// Diagnostic text in the `error: ...` form
    pub fn message(&self) -> String {
        match self {
            FailureReason::Transport { description } => format!("error: {}", description),
            FailureReason::Rejected {
                errors: Some(errors),
                ..
            } => format!("error: {}", format_error_list(errors)),
            FailureReason::Rejected { errors: None, .. } => "error".to_string(),
        }
    }
}

/// Renders `["a", "b"]` as `['a', 'b']`
fn format_error_list(errors: &[String]) -> String {
    let items: Vec<String> = errors.iter().map(|e| quote_item(e)).collect();
    format!("[{}]", items.join(", "))
}

/// Quotes like a Python string repr: single quotes unless the text contains
/// one and no double quote, control characters escaped
fn quote_item(item: &str) -> String {
    let quote = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(item.len() + 2);
    out.push(quote);
    for c in item.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Terminal state of a send call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NotificationOutcome {
    Delivered {
        attempts: u32,
        /// Request id assigned by the service, when the body carried one
        request_id: Option<String>,
    },
    Failed {
        attempts: u32,
        /// Reason recorded for the last attempt
        reason: FailureReason,
    },
}

impl NotificationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, NotificationOutcome::Delivered { .. })
    }

    /// Number of POST attempts made
    pub fn attempts(&self) -> u32 {
        match self {
            NotificationOutcome::Delivered { attempts, .. }
            | NotificationOutcome::Failed { attempts, .. } => *attempts,
        }
    }

    /// `"success"`, or the failure diagnostic
    pub fn message(&self) -> String {
        match self {
            NotificationOutcome::Delivered { .. } => "success".to_string(),
            NotificationOutcome::Failed { reason, .. } => reason.message(),
        }
    }

    pub fn failure_reason(&self) -> Option<&FailureReason> {
        match self {
            NotificationOutcome::Delivered { .. } => None,
            NotificationOutcome::Failed { reason, .. } => Some(reason),
        }
    }

    /// Flattens into a `(success, message)` pair
    pub fn into_tuple(self) -> (bool, String) {
        (self.is_success(), self.message())
    }
}

impl std::fmt::Display for NotificationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
