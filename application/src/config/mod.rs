//! Application configuration
//!
//! - [`PollingParams`]: how the controller polls on placeholder answers

mod polling;

pub use polling::PollingParams;
