//! Notification sounds registered with the Pushover service.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PushoverError;

/// Named notification sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    Pushover,
    Bike,
    Bugle,
    CashRegister,
    Classical,
    Cosmic,
    Falling,
    Gamelan,
    Incoming,
    Intermission,
    Magic,
    Mechanical,
    PianoBar,
    Siren,
    SpaceAlarm,
    Tugboat,
    Alien,
    Climb,
    #[default]
    Persistent,
    Echo,
    UpDown,
    Vibrate,
    None,
}

impl Sound {
    pub const ALL: [Sound; 23] = [
        Sound::Pushover,
        Sound::Bike,
        Sound::Bugle,
        Sound::CashRegister,
        Sound::Classical,
        Sound::Cosmic,
        Sound::Falling,
        Sound::Gamelan,
        Sound::Incoming,
        Sound::Intermission,
        Sound::Magic,
        Sound::Mechanical,
        Sound::PianoBar,
        Sound::Siren,
        Sound::SpaceAlarm,
        Sound::Tugboat,
        Sound::Alien,
        Sound::Climb,
        Sound::Persistent,
        Sound::Echo,
        Sound::UpDown,
        Sound::Vibrate,
        Sound::None,
    ];

    /// Name used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Sound::Pushover => "pushover",
            Sound::Bike => "bike",
            Sound::Bugle => "bugle",
            Sound::CashRegister => "cashregister",
            Sound::Classical => "classical",
            Sound::Cosmic => "cosmic",
            Sound::Falling => "falling",
            Sound::Gamelan => "gamelan",
            Sound::Incoming => "incoming",
            Sound::Intermission => "intermission",
            Sound::Magic => "magic",
            Sound::Mechanical => "mechanical",
            Sound::PianoBar => "pianobar",
            Sound::Siren => "siren",
            Sound::SpaceAlarm => "spacealarm",
            Sound::Tugboat => "tugboat",
            Sound::Alien => "alien",
            Sound::Climb => "climb",
            Sound::Persistent => "persistent",
            Sound::Echo => "echo",
            Sound::UpDown => "updown",
            Sound::Vibrate => "vibrate",
            Sound::None => "none",
        }
    }
}

impl FromStr for Sound {
    type Err = PushoverError;

    /// Names are matched exactly, as the API does.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sound::ALL
            .into_iter()
            .find(|sound| sound.as_str() == s)
            .ok_or_else(|| {
                PushoverError::invalid_argument("sound", format!("unknown sound '{}'", s))
            })
    }
}

impl AsRef<str> for Sound {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for Sound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
