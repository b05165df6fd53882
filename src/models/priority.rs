//! Message priority levels understood by the Pushover API.

use serde::{Deserialize, Serialize};

use crate::error::PushoverError;

/// Notification priority.
///
/// The discriminants are the integer values sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// No notification is generated, only the app badge is incremented
    Lowest = -2,
    /// Popup without sound or vibration
    Low = -1,
    /// Sound, vibration and popup according to device settings
    #[default]
    Normal = 0,
    /// Bypasses the user's quiet hours
    High = 1,
    /// Repeats until acknowledged. Not supported by this client.
    Emergency = 2,
}

impl Priority {
    /// All priority levels, lowest first
    pub const ALL: [Priority; 5] = [
        Priority::Lowest,
        Priority::Low,
        Priority::Normal,
        Priority::High,
        Priority::Emergency,
    ];

    /// Integer value used in the request payload
    pub fn value(self) -> i8 {
        self as i8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Lowest => "lowest",
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
            Priority::Emergency => "emergency",
        }
    }
}

impl TryFrom<i64> for Priority {
    type Error = PushoverError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Priority::ALL
            .into_iter()
            .find(|p| i64::from(p.value()) == value)
            .ok_or_else(|| {
                PushoverError::invalid_argument(
                    "priority",
                    format!("{} is not a valid priority, expected a value in -2..=2", value),
                )
            })
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_wire_values() {
        assert_eq!(Priority::Lowest.value(), -2);
        assert_eq!(Priority::Low.value(), -1);
        assert_eq!(Priority::Normal.value(), 0);
        assert_eq!(Priority::High.value(), 1);
        assert_eq!(Priority::Emergency.value(), 2);
    }

    #[test]
    fn test_priority_default_is_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
    }

    #[test]
    fn test_priority_try_from_valid() {
        for priority in Priority::ALL {
            assert_eq!(
                Priority::try_from(i64::from(priority.value())).unwrap(),
                priority
            );
        }
    }

    #[test]
    fn test_priority_try_from_out_of_range() {
        for value in [-3, 3, 42, i64::MIN] {
            let err = Priority::try_from(value).unwrap_err();
            assert!(matches!(
                err,
                PushoverError::InvalidArgument { ref field, .. } if field == "priority"
            ));
        }
    }
}
