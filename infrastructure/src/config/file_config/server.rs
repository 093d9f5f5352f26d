//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default location of the answer service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Raw answer-service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Base URL the `/api/...` paths are appended to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl FileServerConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
