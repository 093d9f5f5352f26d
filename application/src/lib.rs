//! Application layer for edubot
//!
//! This crate contains the chat controller use case, port definitions,
//! and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::PollingParams;
pub use ports::{
    answer_service::{AnswerService, ServiceError},
    notifier::{ChatNotifier, NoNotifier},
};
pub use use_cases::chat_controller::{ChatController, ChatError, FeedbackOutcome, SubmitOutcome};
