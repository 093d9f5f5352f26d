//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for EduBot.

mod repl;

pub use repl::ChatRepl;
