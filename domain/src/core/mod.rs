//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question to send to the answer service
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
