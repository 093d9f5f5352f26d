//! Error types for the HTTP adapter

use thiserror::Error;

/// Errors raised while setting up the HTTP client
///
/// Request-time failures are reported as
/// [`ServiceError`](edubot_application::ServiceError) instead.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),
}
