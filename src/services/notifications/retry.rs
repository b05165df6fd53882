use std::time::Duration;

/// Attempts made before giving up
pub const MAX_ATTEMPTS: u32 = 3;

/// Wait between attempts
pub const RETRY_INTERVAL: Duration = Duration::from_secs(1);

/// Bounded, fixed-interval retry schedule.
///
/// Every failure is retried the same way, whether it was a transport error
/// or a rejection by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts, at least one attempt is always made
    pub max_attempts: u32,
    pub interval: Duration,
    /// Also wait after the final failed attempt
    pub trailing_delay: bool,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, interval: Duration) -> Self {
        Self {
            max_attempts,
            interval,
            trailing_delay: false,
        }
    }

    pub fn with_trailing_delay(mut self, trailing_delay: bool) -> Self {
        self.trailing_delay = trailing_delay;
        self
    }

    /// Attempt count actually used
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Whether to sleep after failed attempt number `attempt` (1-based)
    pub fn should_wait_after(&self, attempt: u32) -> bool {
        attempt < self.attempts() || self.trailing_delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS, RETRY_INTERVAL)
    }
}
