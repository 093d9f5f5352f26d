//! Answers returned by the answer service.
//!
//! The service either answers directly or replies with the
//! [`PENDING_ANSWER`] placeholder, which tells the client to ask again later.

use serde::{Deserialize, Serialize};

/// Placeholder text the service returns while a human has not answered yet
pub const PENDING_ANSWER: &str = "Please wait for a while, our team will answer you soon.";

/// Server-assigned handle for a question/answer pair
///
/// Kept as the raw JSON value (the service uses integers today) so it is
/// echoed back in feedback exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(serde_json::Value);

impl QuestionId {
    pub fn new(value: impl Into<serde_json::Value>) -> Self {
        Self(value.into())
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// An answer to a submitted question (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "answer")]
    pub text: String,
    pub question_id: QuestionId,
}

impl Answer {
    pub fn new(text: impl Into<String>, question_id: QuestionId) -> Self {
        Self {
            text: text.into(),
            question_id,
        }
    }

    /// True when the service has not produced a real answer yet
    pub fn is_pending(&self) -> bool {
        self.text == PENDING_ANSWER
    }
}

/// The latest exchange, kept so feedback can reference it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAnswer {
    pub question_id: QuestionId,
    pub text: String,
}

impl From<&Answer> for PendingAnswer {
    fn from(answer: &Answer) -> Self {
        Self {
            question_id: answer.question_id.clone(),
            text: answer.text.clone(),
        }
    }
}
