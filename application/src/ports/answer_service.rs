//! Answer service port
//!
//! Defines the interface for talking to the remote question/feedback service.

use async_trait::async_trait;
use edubot_domain::{Answer, FeedbackSubmission, SessionId};
use thiserror::Error;

/// Errors that can occur while talking to the answer service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP error: {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Remote service that answers questions and accepts feedback
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Submit a question for the given session
    async fn ask(&self, session_id: &SessionId, question: &str) -> Result<Answer, ServiceError>;

    /// Submit feedback on an answer. The response body is not used.
    async fn send_feedback(&self, submission: &FeedbackSubmission) -> Result<(), ServiceError>;
}
