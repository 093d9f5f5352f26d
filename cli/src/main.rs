//! CLI entrypoint for EduBot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use edubot_application::{ChatController, ChatNotifier, SubmitOutcome};
use edubot_infrastructure::{ConfigLoader, FileConfig, HttpAnswerService, Severity};
use edubot_presentation::{
    ChatRepl, Cli, OutputConfig, ProgressReporter, ReplConfig, SimpleProgress,
};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    for issue in config.validate() {
        match issue.severity {
            Severity::Error => bail!("Invalid configuration: {}", issue.message),
            Severity::Warning => warn!("{}", issue.message),
        }
    }

    OutputConfig {
        color: config.output.color,
    }
    .apply();

    info!("Starting EduBot against {}", config.server.base_url);

    // === Dependency Injection ===
    let service = Arc::new(
        HttpAnswerService::with_timeout(&config.server.base_url, config.server.timeout())
            .context("Failed to create the answer service client")?,
    );
    let controller = Arc::new(
        ChatController::new(service).with_polling(config.polling.to_polling_params()),
    );

    // Single question mode
    if let Some(question) = cli.question.as_deref() {
        return ask_once(&controller, question, !cli.quiet).await;
    }

    // Chat mode
    let repl = ChatRepl::new(controller).with_config(ReplConfig {
        show_progress: config.repl.show_progress && !cli.quiet,
        history_file: config.repl.history_file.clone(),
    });
    repl.run().await?;

    Ok(())
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Command-line flags take precedence over every config source
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.base_url {
        config.server.base_url = url.clone();
    }
    if let Some(secs) = cli.poll_interval {
        config.polling.interval_seconds = secs;
    }
    if let Some(max) = cli.max_polls {
        config.polling.max_attempts = Some(max);
    }
}

async fn ask_once(controller: &ChatController, question: &str, show_progress: bool) -> Result<()> {
    let notifier: Box<dyn ChatNotifier> = if show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress::new())
    };

    let submit = controller.submit_question(question, notifier.as_ref());
    tokio::pin!(submit);

    let outcome = tokio::select! {
        outcome = &mut submit => outcome,
        _ = tokio::signal::ctrl_c() => {
            controller.cancel();
            submit.await
        }
    }?;

    match outcome {
        SubmitOutcome::Answered(_) => Ok(()),
        SubmitOutcome::StillPending(answer) => {
            bail!("No answer yet for question {}; ask again later", answer.question_id)
        }
        SubmitOutcome::Cancelled => bail!("Cancelled before an answer arrived"),
        SubmitOutcome::Ignored => bail!("Another question is already in flight"),
    }
}
