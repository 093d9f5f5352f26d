//! Console output formatter for the chat

use colored::Colorize;
use edubot_domain::{Author, Message};

/// Formats conversation output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Large heading shown while no question has been asked yet
    pub fn banner() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str(&format!(
            "│                {}                   │\n",
            "The EduBot".cyan().bold()
        ));
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push_str(&format!(
            "{}\n",
            "Ask a question... (/help for commands)".dimmed()
        ));
        output
    }

    /// Compact header shown once the conversation has started
    pub fn header() -> String {
        format!(
            "{} {} {}\n",
            "EduBot".cyan().bold(),
            "|".dimmed(),
            "Ask Anything About Our Courses!".bold()
        )
    }

    /// Format a single message
    pub fn message(message: &Message) -> String {
        match message.author {
            Author::User => format!("{} {}", "You:".green().bold(), message.text),
            Author::Bot => format!("{} {}", "EduBot:".cyan().bold(), message.text),
        }
    }

    /// Format the full history, one message per line
    pub fn history(messages: &[Message]) -> String {
        if messages.is_empty() {
            return format!("{}\n", "No messages yet.".dimmed());
        }
        let mut output = String::new();
        for (i, message) in messages.iter().enumerate() {
            output.push_str(&format!(
                "{} {}\n",
                format!("[{}]", i).dimmed(),
                Self::message(message)
            ));
        }
        output
    }

    /// Hint printed under the latest answer while feedback is enabled
    pub fn feedback_hint() -> String {
        format!("  {}", "Rate this answer: /up 👍  /down 👎".dimmed())
    }

    /// Transient error notification
    pub fn error_notice(message: &str) -> String {
        format!("{} {}", "✗".red().bold(), message.red())
    }

    /// Informational notice
    pub fn notice(message: &str) -> String {
        format!("{} {}", "→".cyan(), message)
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("Commands:\n");
        output.push_str("  /up, /👍          - Mark the latest answer as helpful\n");
        output.push_str("  /down, /👎        - Mark the latest answer as unhelpful\n");
        output.push_str("  /history          - Show the conversation so far\n");
        output.push_str("  /session          - Show the session id\n");
        output.push_str("  /help, /h, /?     - Show this help\n");
        output.push_str("  /quit, /exit, /q  - Exit chat\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_labels() {
        let user = ConsoleFormatter::message(&Message::user("What is the course schedule?"));
        assert!(user.contains("You:"));
        assert!(user.contains("What is the course schedule?"));

        let bot = ConsoleFormatter::message(&Message::bot("Monday to Friday, 9am-5pm."));
        assert!(bot.contains("EduBot:"));
        assert!(bot.contains("Monday to Friday, 9am-5pm."));
    }

    #[test]
    fn test_history_lists_every_message_in_order() {
        let messages = vec![Message::user("first"), Message::bot("second")];
        let output = ConsoleFormatter::history(&messages);
        assert_eq!(output.lines().count(), 2);
        assert!(output.find("first").unwrap() < output.find("second").unwrap());
    }

    #[test]
    fn test_empty_history() {
        assert!(ConsoleFormatter::history(&[]).contains("No messages yet."));
    }

    #[test]
    fn test_headings() {
        assert!(ConsoleFormatter::banner().contains("The EduBot"));
        assert!(ConsoleFormatter::header().contains("Ask Anything About Our Courses!"));
    }
}
