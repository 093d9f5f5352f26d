//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod output;
mod polling;
mod repl;
mod server;

pub use output::FileOutputConfig;
pub use polling::FilePollingConfig;
pub use repl::FileReplConfig;
pub use server::{DEFAULT_BASE_URL, FileServerConfig};

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueCode {
    EmptyBaseUrl,
    UnsupportedScheme,
    ZeroTimeout,
    ZeroPollInterval,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    fn new(severity: Severity, code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Answer service location
    pub server: FileServerConfig,
    /// Placeholder-answer polling
    pub polling: FilePollingConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let base_url = self.server.base_url.trim();
        if base_url.is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::EmptyBaseUrl,
                "server.base_url is empty",
            ));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::UnsupportedScheme,
                format!("server.base_url '{}' must start with http:// or https://", base_url),
            ));
        }

        if self.server.timeout_seconds == 0 {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                ConfigIssueCode::ZeroTimeout,
                "server.timeout_seconds is 0; every request will time out immediately",
            ));
        }

        if self.polling.interval_seconds == 0 {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                ConfigIssueCode::ZeroPollInterval,
                "polling.interval_seconds is 0; placeholder answers are re-asked without delay",
            ));
        }

        issues
    }
}
