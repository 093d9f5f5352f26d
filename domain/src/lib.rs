//! Domain layer for edubot
//!
//! This crate contains the conversation entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Conversation**: append-only history of user/bot message pairs, scoped
//!   by a [`SessionId`] generated once per run
//! - **Pending answer**: the service may reply with a placeholder
//!   ([`PENDING_ANSWER`]) that the client polls on
//! - **Feedback**: a [`Vote`] on the latest bot answer only

pub mod answer;
pub mod core;
pub mod feedback;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use answer::{Answer, PENDING_ANSWER, PendingAnswer, QuestionId};
pub use crate::core::{error::DomainError, question::Question};
pub use feedback::{FeedbackSubmission, Vote};
pub use session::{
    conversation::{Conversation, SlotState},
    entities::{Author, Message},
    id::SessionId,
};
