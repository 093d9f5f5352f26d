//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Invalid vote: {0} (expected up/down)")]
    InvalidVote(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_question_display() {
        assert_eq!(
            DomainError::EmptyQuestion.to_string(),
            "Question cannot be empty"
        );
    }

    #[test]
    fn test_invalid_vote_display() {
        let error = DomainError::InvalidVote("sideways".to_string());
        assert_eq!(error.to_string(), "Invalid vote: sideways (expected up/down)");
    }
}
