//! Chat notifiers: render exchanges, the busy spinner, and transient errors

use crate::output::console::ConsoleFormatter;
use edubot_application::ChatNotifier;
use edubot_domain::{Answer, Message, Question};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Prints user/bot pairs, with the conversation header before the first one
struct ExchangePrinter {
    header_pending: AtomicBool,
}

impl ExchangePrinter {
    fn new(show_header: bool) -> Self {
        Self {
            header_pending: AtomicBool::new(show_header),
        }
    }

    fn render(&self, question: &Question, answer: &Answer) -> String {
        let mut output = String::new();
        if self.header_pending.swap(false, Ordering::SeqCst) {
            output.push_str(&ConsoleFormatter::header());
            output.push('\n');
        }
        output.push_str(&ConsoleFormatter::message(&Message::user(question.content())));
        output.push('\n');
        output.push_str(&ConsoleFormatter::message(&Message::bot(answer.text.clone())));
        output
    }
}

fn poll_message(attempt: usize, delay: Duration) -> String {
    format!(
        "Our team is on it; asking again in {}s (attempt {})",
        delay.as_secs(),
        attempt + 1
    )
}

/// Reports progress with a spinner while a question chain is in flight
pub struct ProgressReporter {
    printer: ExchangePrinter,
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            printer: ExchangePrinter::new(false),
            spinner: Mutex::new(None),
        }
    }

    /// Print the conversation header before the first exchange
    pub fn with_header(mut self, show: bool) -> Self {
        self.printer = ExchangePrinter::new(show);
        self
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Print above the spinner without tearing it
    fn print_line(&self, line: &str) {
        match self.spinner.lock().ok().as_deref().and_then(Option::as_ref) {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }

    fn set_message(&self, message: String) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            pb.set_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatNotifier for ProgressReporter {
    fn on_request_start(&self, _question: &Question) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Waiting for EduBot...");
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_exchange(&self, question: &Question, answer: &Answer) {
        self.print_line(&self.printer.render(question, answer));
    }

    fn on_poll_scheduled(&self, attempt: usize, delay: Duration) {
        self.set_message(poll_message(attempt, delay));
    }

    fn on_feedback_sent(&self) {
        self.print_line(&ConsoleFormatter::notice("Thanks for the feedback."));
    }

    fn on_error(&self, message: &str) {
        match self.spinner.lock().ok().as_deref().and_then(Option::as_ref) {
            Some(pb) => pb.suspend(|| eprintln!("{}", ConsoleFormatter::error_notice(message))),
            None => eprintln!("{}", ConsoleFormatter::error_notice(message)),
        }
    }

    fn on_request_end(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner)
pub struct SimpleProgress {
    printer: ExchangePrinter,
}

impl SimpleProgress {
    pub fn new() -> Self {
        Self {
            printer: ExchangePrinter::new(false),
        }
    }

    pub fn with_header(mut self, show: bool) -> Self {
        self.printer = ExchangePrinter::new(show);
        self
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatNotifier for SimpleProgress {
    fn on_exchange(&self, question: &Question, answer: &Answer) {
        println!("{}", self.printer.render(question, answer));
    }

    fn on_poll_scheduled(&self, attempt: usize, delay: Duration) {
        println!("{}", ConsoleFormatter::notice(&poll_message(attempt, delay)));
    }

    fn on_feedback_sent(&self) {
        println!("{}", ConsoleFormatter::notice("Thanks for the feedback."));
    }

    fn on_error(&self, message: &str) {
        eprintln!("{}", ConsoleFormatter::error_notice(message));
    }
}
