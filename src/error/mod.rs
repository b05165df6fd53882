mod pushover_error;

pub use pushover_error::{PushoverError, PushoverResult};
