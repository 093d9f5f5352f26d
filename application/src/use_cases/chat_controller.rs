//! Chat controller use case.
//!
//! Owns one [`Conversation`] and drives the two interactions with the
//! answer service:
//!
//! 1. **Questions**: submit, record the user/bot pair, and while the
//!    service replies with the [`PENDING_ANSWER`](edubot_domain::PENDING_ANSWER)
//!    placeholder, wait [`PollingParams::interval`] and ask again. Every
//!    retry is recorded as a new visible pair.
//! 2. **Feedback**: a vote on the latest bot answer. Only thumbs-down is
//!    sent to the service.
//!
//! At most one question chain runs at a time; submissions made while a
//! chain is in flight are ignored.

use crate::config::PollingParams;
use crate::ports::answer_service::{AnswerService, ServiceError};
use crate::ports::notifier::ChatNotifier;
use edubot_domain::util::preview;
use edubot_domain::{
    Answer, Conversation, DomainError, Message, Question, SessionId, SlotState, Vote,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const QUESTION_ERROR_MESSAGE: &str = "Internal Server Error";
const FEEDBACK_ERROR_MESSAGE: &str = "Error submitting feedback";

/// Errors that can occur in the chat controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Service error: {0}")]
    Service(#[from] ServiceError),
}

/// Result of [`ChatController::submit_question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A real answer arrived and ended the chain.
    Answered(Answer),
    /// The attempt limit was reached while the service still replied with
    /// the placeholder.
    StillPending(Answer),
    /// The chain was cancelled before a real answer arrived.
    Cancelled,
    /// Another question was already in flight; nothing was sent.
    Ignored,
}

/// Result of a feedback submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// Thumbs-down was sent to the service.
    Sent,
    /// Thumbs-up was accepted locally; nothing is sent for it.
    Recorded,
    /// Feedback is not enabled for the target message.
    Ignored,
}

/// Controller for a single chat session.
///
/// The conversation lock is never held across an await point.
pub struct ChatController {
    service: Arc<dyn AnswerService>,
    polling: PollingParams,
    conversation: Mutex<Conversation>,
    in_flight: AtomicBool,
    cancel: Mutex<Option<CancellationToken>>,
}

impl ChatController {
    /// Start a new session with a freshly generated session id.
    pub fn new(service: Arc<dyn AnswerService>) -> Self {
        Self::with_conversation(service, Conversation::start())
    }

    pub fn with_conversation(service: Arc<dyn AnswerService>, conversation: Conversation) -> Self {
        info!("Chat session {} started", conversation.session_id());
        Self {
            service,
            polling: PollingParams::default(),
            conversation: Mutex::new(conversation),
            in_flight: AtomicBool::new(false),
            cancel: Mutex::new(None),
        }
    }

    pub fn with_polling(mut self, polling: PollingParams) -> Self {
        self.polling = polling;
        self
    }

    // ==================== State Accessors ====================

    pub fn session_id(&self) -> SessionId {
        self.conversation().session_id().clone()
    }

    /// Snapshot of the message history.
    pub fn messages(&self) -> Vec<Message> {
        self.conversation().messages().to_vec()
    }

    pub fn is_first_query(&self) -> bool {
        self.conversation().is_first_query()
    }

    /// True while a question chain (including its polling waits) runs.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    pub fn latest_bot_index(&self) -> Option<usize> {
        self.conversation().latest_bot_index()
    }

    pub fn feedback_enabled(&self, index: usize) -> bool {
        self.conversation().feedback_enabled(index)
    }

    pub fn slot_state(&self, index: usize) -> SlotState {
        self.conversation().slot_state(index)
    }

    // ==================== Questions ====================

    /// Submit a question and follow the polling chain until a real answer
    /// arrives, the chain fails, or it is cancelled.
    pub async fn submit_question(
        &self,
        text: &str,
        notifier: &dyn ChatNotifier,
    ) -> Result<SubmitOutcome, ChatError> {
        let question = Question::try_new(text)?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Submission ignored: a question is already in flight");
            return Ok(SubmitOutcome::Ignored);
        }

        let token = CancellationToken::new();
        *self.cancel_slot() = Some(token.clone());
        let _guard = InFlightGuard { controller: self };

        notifier.on_request_start(&question);
        let result = self.run_chain(&question, &token, notifier).await;
        notifier.on_request_end();
        result
    }

    /// Cancel the running question chain. Returns false when nothing runs.
    pub fn cancel(&self) -> bool {
        match self.cancel_slot().as_ref() {
            Some(token) => {
                token.cancel();
                true
            }
            None => false,
        }
    }

    async fn run_chain(
        &self,
        question: &Question,
        token: &CancellationToken,
        notifier: &dyn ChatNotifier,
    ) -> Result<SubmitOutcome, ChatError> {
        let session_id = self.session_id();
        let mut attempts = 0;

        loop {
            attempts += 1;
            debug!(
                "Asking (attempt {}): {}",
                attempts,
                preview(question.content(), 80)
            );

            let response = tokio::select! {
                _ = token.cancelled() => {
                    info!("Question cancelled while waiting for the service");
                    return Ok(SubmitOutcome::Cancelled);
                }
                response = self.service.ask(&session_id, question.content()) => response,
            };

            let answer = match response {
                Ok(answer) => answer,
                Err(e) => {
                    error!("Question submission failed: {}", e);
                    notifier.on_error(QUESTION_ERROR_MESSAGE);
                    return Err(ChatError::Service(e));
                }
            };

            self.conversation().record_exchange(question, &answer);
            notifier.on_exchange(question, &answer);

            if !answer.is_pending() {
                info!(
                    "Answer received for question {} after {} attempt(s)",
                    answer.question_id, attempts
                );
                return Ok(SubmitOutcome::Answered(answer));
            }

            if !self.polling.allows_another(attempts) {
                warn!(
                    "Still no answer for question {} after {} attempts; giving up",
                    answer.question_id, attempts
                );
                return Ok(SubmitOutcome::StillPending(answer));
            }

            debug!(
                "Placeholder answer received; asking again in {:?}",
                self.polling.interval
            );
            notifier.on_poll_scheduled(attempts, self.polling.interval);

            tokio::select! {
                _ = token.cancelled() => {
                    info!("Polling cancelled after {} attempt(s)", attempts);
                    return Ok(SubmitOutcome::Cancelled);
                }
                _ = tokio::time::sleep(self.polling.interval) => {}
            }
        }
    }

    // ==================== Feedback ====================

    /// Vote on the latest message. A no-op unless it is a bot message that
    /// has not received feedback yet.
    pub async fn submit_feedback(
        &self,
        vote: Vote,
        notifier: &dyn ChatNotifier,
    ) -> Result<FeedbackOutcome, ChatError> {
        let Some(index) = self.latest_bot_index() else {
            debug!("Feedback ignored: latest message is not a bot answer");
            return Ok(FeedbackOutcome::Ignored);
        };
        self.submit_feedback_at(index, vote, notifier).await
    }

    /// Vote on the message at `index`.
    pub async fn submit_feedback_at(
        &self,
        index: usize,
        vote: Vote,
        notifier: &dyn ChatNotifier,
    ) -> Result<FeedbackOutcome, ChatError> {
        // The slot is claimed before the request so a repeated vote cannot
        // send a second POST.
        let submission = {
            let mut conversation = self.conversation();
            let Some(submission) = conversation.feedback_submission(index, vote) else {
                debug!("Feedback ignored: not enabled for message {}", index);
                return Ok(FeedbackOutcome::Ignored);
            };
            conversation.mark_feedback_given();
            submission
        };

        if vote == Vote::ThumbsUp {
            debug!("Thumbs-up recorded for question {}", submission.question);
            return Ok(FeedbackOutcome::Recorded);
        }

        match self.service.send_feedback(&submission).await {
            Ok(()) => {
                info!("Feedback submitted for question {}", submission.question);
                notifier.on_feedback_sent();
                Ok(FeedbackOutcome::Sent)
            }
            Err(e) => {
                error!("Error submitting feedback: {}", e);
                notifier.on_error(FEEDBACK_ERROR_MESSAGE);
                let mut conversation = self.conversation();
                if conversation.latest_bot_index() == Some(index) {
                    conversation.clear_feedback_given();
                }
                Err(ChatError::Service(e))
            }
        }
    }

    // ==================== Internals ====================

    fn conversation(&self) -> MutexGuard<'_, Conversation> {
        self.conversation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn cancel_slot(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        self.cancel.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Clears the in-flight state when a chain ends, including when the
/// submitting future is dropped.
struct InFlightGuard<'a> {
    controller: &'a ChatController,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        *self.controller.cancel_slot() = None;
        self.controller.in_flight.store(false, Ordering::SeqCst);
    }
}
