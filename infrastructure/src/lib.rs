//! Infrastructure layer for edubot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileOutputConfig, FilePollingConfig,
    FileReplConfig, FileServerConfig, Severity,
};
pub use http::{
    client::{DEFAULT_TIMEOUT, HttpAnswerService},
    error::HttpError,
};
