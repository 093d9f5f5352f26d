//! Polling configuration from TOML (`[polling]` section)

use edubot_application::PollingParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw polling configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollingConfig {
    /// Seconds to wait before re-asking after a placeholder answer
    pub interval_seconds: u64,
    /// Maximum requests per question; unset polls until answered
    pub max_attempts: Option<usize>,
}

impl Default for FilePollingConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 20,
            max_attempts: None,
        }
    }
}

impl FilePollingConfig {
    pub fn to_polling_params(&self) -> PollingParams {
        PollingParams::default()
            .with_interval(Duration::from_secs(self.interval_seconds))
            .with_max_attempts(self.max_attempts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_application_default() {
        assert_eq!(
            FilePollingConfig::default().to_polling_params(),
            PollingParams::default()
        );
    }

    #[test]
    fn test_polling_deserialize() {
        let toml_str = r#"
[polling]
interval_seconds = 5
max_attempts = 12
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.polling.to_polling_params();
        assert_eq!(params.interval, Duration::from_secs(5));
        assert_eq!(params.max_attempts, Some(12));
    }
}
