//! Polling parameters for placeholder answers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Controls the re-ask loop that runs while the service answers with the
/// placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingParams {
    /// Delay before asking the same question again.
    pub interval: Duration,
    /// Stop after this many requests in one chain. `None` polls until a
    /// real answer arrives.
    pub max_attempts: Option<usize>,
}

impl Default for PollingParams {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(20),
            max_attempts: None,
        }
    }
}

impl PollingParams {
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_max_attempts(mut self, max: Option<usize>) -> Self {
        self.max_attempts = max;
        self
    }

    /// Whether another request is allowed after `attempts` requests
    pub fn allows_another(&self, attempts: usize) -> bool {
        self.max_attempts.is_none_or(|max| attempts < max)
    }
}
