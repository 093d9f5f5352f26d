//! Configuration file loading for edubot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `EDUBOT_*` environment variables (`EDUBOT_SERVER__BASE_URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./edubot.toml` or `./.edubot.toml`
//! 4. Global: `$XDG_CONFIG_HOME/edubot/config.toml` (or the platform equivalent)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigIssueCode, DEFAULT_BASE_URL, FileConfig, FileOutputConfig,
    FilePollingConfig, FileReplConfig, FileServerConfig, Severity,
};
pub use loader::ConfigLoader;
