//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{ProgressReporter, SimpleProgress};
use edubot_application::{ChatController, ChatError, ChatNotifier, FeedbackOutcome, SubmitOutcome};
use edubot_domain::Vote;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;
use tracing::debug;

/// What the REPL should do after a slash command
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Vote(Vote),
    History,
    Session,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(input: &str) -> Self {
        match input {
            "/quit" | "/exit" | "/q" => Command::Quit,
            "/help" | "/h" | "/?" => Command::Help,
            "/history" => Command::History,
            "/session" => Command::Session,
            other => match other.strip_prefix('/').map(str::parse::<Vote>) {
                Some(Ok(vote)) => Command::Vote(vote),
                _ => Command::Unknown(other.to_string()),
            },
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    controller: Arc<ChatController>,
    config: ReplConfig,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(controller: Arc<ChatController>) -> Self {
        Self {
            controller,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!("{}", ConsoleFormatter::banner());

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let trimmed = line.trim();

                    // Skip empty lines
                    if trimmed.is_empty() {
                        continue;
                    }

                    if trimmed.starts_with('/') {
                        if self.handle_command(trimmed).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(trimmed);
                    self.process_question(&line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn notifier(&self) -> Box<dyn ChatNotifier> {
        let first_query = self.controller.is_first_query();
        if self.config.show_progress {
            Box::new(ProgressReporter::new().with_header(first_query))
        } else {
            Box::new(SimpleProgress::new().with_header(first_query))
        }
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&self, input: &str) -> bool {
        match Command::parse(input) {
            Command::Quit => {
                println!("Bye!");
                return true;
            }
            Command::Help => println!("{}", ConsoleFormatter::help()),
            Command::History => print!("{}", ConsoleFormatter::history(&self.controller.messages())),
            Command::Session => println!("Session: {}", self.controller.session_id()),
            Command::Vote(vote) => self.process_vote(vote).await,
            Command::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_question(&self, text: &str) {
        let notifier = self.notifier();
        let submit = self.controller.submit_question(text, notifier.as_ref());
        tokio::pin!(submit);

        let result = tokio::select! {
            result = &mut submit => result,
            _ = tokio::signal::ctrl_c() => {
                debug!("Ctrl-C received; cancelling the running question");
                self.controller.cancel();
                submit.await
            }
        };

        match result {
            Ok(SubmitOutcome::Answered(_)) => {
                if self
                    .controller
                    .latest_bot_index()
                    .is_some_and(|i| self.controller.feedback_enabled(i))
                {
                    println!("{}", ConsoleFormatter::feedback_hint());
                }
            }
            Ok(SubmitOutcome::StillPending(_)) => {
                println!(
                    "{}",
                    ConsoleFormatter::notice("No answer yet. Please ask again later.")
                );
            }
            Ok(SubmitOutcome::Cancelled) => {
                println!("{}", ConsoleFormatter::notice("Stopped waiting for an answer."));
            }
            Ok(SubmitOutcome::Ignored) => {
                println!(
                    "{}",
                    ConsoleFormatter::notice("Please wait for the current question to finish.")
                );
            }
            Err(ChatError::Domain(e)) => {
                println!("{}", ConsoleFormatter::notice(&e.to_string()));
            }
            // Already shown through the notifier
            Err(ChatError::Service(_)) => {}
        }
        println!();
    }

    async fn process_vote(&self, vote: Vote) {
        let notifier = self.notifier();
        match self.controller.submit_feedback(vote, notifier.as_ref()).await {
            Ok(FeedbackOutcome::Recorded) => println!("{}", ConsoleFormatter::notice("Thanks!")),
            Ok(FeedbackOutcome::Ignored) => {
                println!("{}", ConsoleFormatter::notice("There is no answer to rate."))
            }
            Ok(FeedbackOutcome::Sent) | Err(_) => {}
        }
    }
}
