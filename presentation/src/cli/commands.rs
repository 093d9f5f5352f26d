//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for edubot
#[derive(Parser, Debug)]
#[command(name = "edubot")]
#[command(author, version, about = "EduBot - Ask anything about our courses")]
#[command(long_about = r#"
EduBot sends your questions to the course answer service and shows the
conversation. When the team has not answered yet, EduBot asks again every
20 seconds until a real answer arrives (Ctrl-C cancels the wait).

Without a question, EduBot starts an interactive chat. In chat mode use
/down to flag the latest answer as unhelpful.

Configuration files are loaded from (in priority order):
1. EDUBOT_* environment variables (e.g. EDUBOT_SERVER__BASE_URL)
2. --config <path>     Explicit config file
3. ./edubot.toml       Project-level config
4. ~/.config/edubot/config.toml   Global config

Example:
  edubot
  edubot "What is the course schedule?"
  edubot --base-url http://edubot.internal:8000 --poll-interval 5
"#)]
pub struct Cli {
    /// Ask a single question and exit (starts chat mode when omitted)
    pub question: Option<String>,

    /// Base URL of the answer service
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Seconds to wait before asking again after a placeholder answer
    #[arg(long, value_name = "SECONDS")]
    pub poll_interval: Option<u64>,

    /// Give up after this many requests for one question
    #[arg(long, value_name = "N")]
    pub max_polls: Option<usize>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the busy spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_one_shot_question() {
        let cli = Cli::parse_from(["edubot", "-vv", "--poll-interval", "5", "When is the exam?"]);
        assert_eq!(cli.question.as_deref(), Some("When is the exam?"));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.poll_interval, Some(5));
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn test_parse_chat_mode_defaults() {
        let cli = Cli::parse_from(["edubot"]);
        assert!(cli.question.is_none());
        assert!(!cli.quiet);
        assert!(!cli.no_config);
        assert_eq!(cli.verbose, 0);
    }
}
