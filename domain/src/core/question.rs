//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question typed by the user (Value Object)
///
/// The text is kept verbatim, surrounding whitespace included, because
/// polling retries resend exactly what was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a question, rejecting blank text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::EmptyQuestion);
        }
        Ok(Self { content })
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::try_new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::try_new("What is the course schedule?").unwrap();
        assert_eq!(q.content(), "What is the course schedule?");
    }

    #[test]
    fn test_blank_question_rejected() {
        assert_eq!(Question::try_new(""), Err(DomainError::EmptyQuestion));
        assert_eq!(Question::try_new("  \t\n"), Err(DomainError::EmptyQuestion));
    }

    #[test]
    fn test_content_kept_verbatim() {
        let q = Question::try_from("  fees? ").unwrap();
        assert_eq!(q.content(), "  fees? ");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let q = Question::try_new("hi").unwrap();
        assert_eq!(serde_json::to_string(&q).unwrap(), "\"hi\"");
    }
}
