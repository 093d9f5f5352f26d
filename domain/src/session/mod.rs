//! Chat session domain.
//!
//! - [`id::SessionId`]: per-run session identifier sent with every question
//! - [`entities::Message`]: a single message in the conversation history
//! - [`conversation::Conversation`]: the conversation aggregate and its feedback slots

pub mod conversation;
pub mod entities;
pub mod id;
