//! Feedback on answers.
//!
//! - [`Vote`]: thumbs-up or thumbs-down on the latest answer
//! - [`FeedbackSubmission`]: the payload sent to the feedback endpoint

use crate::answer::QuestionId;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A vote on the latest bot answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    ThumbsUp,
    ThumbsDown,
}

impl Vote {
    pub fn as_emoji(&self) -> &'static str {
        match self {
            Vote::ThumbsUp => "👍",
            Vote::ThumbsDown => "👎",
        }
    }

    /// Whether the vote says the answer was helpful
    pub fn is_helpful(&self) -> bool {
        matches!(self, Vote::ThumbsUp)
    }
}

impl FromStr for Vote {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "👍" | "up" | "+" | "yes" => Ok(Vote::ThumbsUp),
            "👎" | "down" | "-" | "no" => Ok(Vote::ThumbsDown),
            other => Err(DomainError::InvalidVote(other.to_string())),
        }
    }
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_emoji())
    }
}

/// Feedback payload for a single answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackSubmission {
    /// Question the feedback refers to
    pub question: QuestionId,
    /// Answer text being rated
    pub answer: String,
    /// `false` for a thumbs-down
    pub feedback: bool,
}

impl FeedbackSubmission {
    pub fn new(question: QuestionId, answer: impl Into<String>, vote: Vote) -> Self {
        Self {
            question,
            answer: answer.into(),
            feedback: vote.is_helpful(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_votes() {
        assert_eq!("👍".parse::<Vote>().unwrap(), Vote::ThumbsUp);
        assert_eq!("Down".parse::<Vote>().unwrap(), Vote::ThumbsDown);
        assert_eq!("-".parse::<Vote>().unwrap(), Vote::ThumbsDown);
        assert!(matches!(
            "maybe".parse::<Vote>(),
            Err(DomainError::InvalidVote(_))
        ));
    }

    #[test]
    fn test_thumbs_down_payload() {
        let submission = FeedbackSubmission::new(
            QuestionId::new(42),
            "Monday to Friday, 9am-5pm.",
            Vote::ThumbsDown,
        );
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({
                "question": 42,
                "answer": "Monday to Friday, 9am-5pm.",
                "feedback": false
            })
        );
    }
}
