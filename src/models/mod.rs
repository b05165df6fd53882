//! Value types shared by the notification client.

mod priority;
mod sound;

pub use priority::Priority;
pub use sound::Sound;
