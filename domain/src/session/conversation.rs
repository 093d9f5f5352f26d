//! Conversation aggregate
//!
//! Holds the message history of one session together with the flags the
//! chat client renders from: first-query mode, the latest exchange, and
//! which answers already received feedback.

use super::entities::Message;
use super::id::SessionId;
use crate::answer::{Answer, PendingAnswer};
use crate::core::question::Question;
use crate::feedback::{FeedbackSubmission, Vote};
use std::collections::BTreeSet;

/// Feedback state of a single message slot
///
/// ```text
/// NoAnswerYet -> AnswerDisplayed -> FeedbackGiven
///                       |
///                       +-> Superseded (a newer exchange was recorded)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    NoAnswerYet,
    AnswerDisplayed,
    FeedbackGiven,
    Superseded,
}

/// A chat conversation (Aggregate Root)
#[derive(Debug, Clone)]
pub struct Conversation {
    session_id: SessionId,
    messages: Vec<Message>,
    first_query: bool,
    /// Bot message indices that received feedback
    feedback_slots: BTreeSet<usize>,
    pending: Option<PendingAnswer>,
}

impl Conversation {
    /// Start a conversation with a freshly generated session id
    pub fn start() -> Self {
        Self::with_session_id(SessionId::generate())
    }

    pub fn with_session_id(session_id: SessionId) -> Self {
        Self {
            session_id,
            messages: Vec::new(),
            first_query: true,
            feedback_slots: BTreeSet::new(),
            pending: None,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// True until the first exchange has been recorded
    pub fn is_first_query(&self) -> bool {
        self.first_query
    }

    /// Whether the latest answer already received feedback
    pub fn feedback_given(&self) -> bool {
        self.latest_bot_index()
            .is_some_and(|index| self.feedback_slots.contains(&index))
    }

    /// The most recent exchange, if any
    pub fn pending_answer(&self) -> Option<&PendingAnswer> {
        self.pending.as_ref()
    }

    /// Append a question and its answer as one user/bot pair.
    ///
    /// Returns the index of the appended bot message.
    pub fn record_exchange(&mut self, question: &Question, answer: &Answer) -> usize {
        self.messages.push(Message::user(question.content()));
        self.messages.push(Message::bot(answer.text.clone()));
        self.first_query = false;
        self.pending = Some(PendingAnswer::from(answer));
        self.messages.len() - 1
    }

    /// Index of the last message when it is a bot message
    pub fn latest_bot_index(&self) -> Option<usize> {
        self.last_message()
            .filter(|m| m.is_bot())
            .map(|_| self.messages.len() - 1)
    }

    /// Whether feedback controls are enabled for the message at `index`
    pub fn feedback_enabled(&self, index: usize) -> bool {
        self.latest_bot_index() == Some(index) && !self.feedback_slots.contains(&index)
    }

    /// Build the feedback payload for `index`, or `None` when feedback is
    /// not enabled there.
    pub fn feedback_submission(&self, index: usize, vote: Vote) -> Option<FeedbackSubmission> {
        if !self.feedback_enabled(index) {
            return None;
        }
        let pending = self.pending.as_ref()?;
        Some(FeedbackSubmission::new(
            pending.question_id.clone(),
            pending.text.clone(),
            vote,
        ))
    }

    /// Record feedback for the latest answer
    pub fn mark_feedback_given(&mut self) {
        if let Some(index) = self.latest_bot_index() {
            self.feedback_slots.insert(index);
        }
    }

    /// Re-enable feedback for the latest answer after a failed submission
    pub fn clear_feedback_given(&mut self) {
        if let Some(index) = self.latest_bot_index() {
            self.feedback_slots.remove(&index);
        }
    }

    pub fn slot_state(&self, index: usize) -> SlotState {
        match self.messages.get(index) {
            Some(m) if m.is_bot() => {
                if self.feedback_slots.contains(&index) {
                    SlotState::FeedbackGiven
                } else if index + 1 != self.messages.len() {
                    SlotState::Superseded
                } else {
                    SlotState::AnswerDisplayed
                }
            }
            _ => SlotState::NoAnswerYet,
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::start()
    }
}
