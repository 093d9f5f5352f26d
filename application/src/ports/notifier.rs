//! Chat notification port
//!
//! Lets the presentation layer react to what the chat controller does
//! (render exchanges, show a busy indicator, show transient errors).

use edubot_domain::{Answer, Question};
use std::time::Duration;

/// Callbacks fired by [`ChatController`](crate::ChatController)
///
/// All methods default to no-ops.
pub trait ChatNotifier: Send + Sync {
    /// A question chain is starting; input should be treated as disabled
    fn on_request_start(&self, _question: &Question) {}

    /// A user/bot pair was appended to the history
    fn on_exchange(&self, _question: &Question, _answer: &Answer) {}

    /// The answer was the placeholder; the question is asked again after `delay`
    fn on_poll_scheduled(&self, _attempt: usize, _delay: Duration) {}

    /// Thumbs-down feedback was accepted by the service
    fn on_feedback_sent(&self) {}

    /// Transient, non-blocking error notification
    fn on_error(&self, _message: &str) {}

    /// The question chain finished, successfully or not
    fn on_request_end(&self) {}
}

/// No-op notifier for when nothing needs to be shown
pub struct NoNotifier;

impl ChatNotifier for NoNotifier {}
