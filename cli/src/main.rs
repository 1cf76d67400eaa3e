//! CLI entrypoint for Character Quiz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use quiz_application::{LoadCatalogUseCase, NoQuizEventLogger, QuizEventLogger, RunQuizUseCase};
use quiz_domain::{Catalog, ConfigIssue, Severity, core::locale::FALLBACK_LOCALE};
use quiz_infrastructure::{
    ConfigLoader, FileConfig, JsonFileContentProvider, JsonlQuizEventLogger, RngRandomSource,
};
use quiz_presentation::{Cli, ProgressMode, QuizRepl};
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("{}", e))
            .context("Failed to load configuration")?
    };
    report_issues(&config.validate())?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data.data_dir());
    let locale = cli
        .locale
        .clone()
        .or_else(|| config.output.locale.clone())
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string());
    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    info!("Starting Character Quiz (data: {})", data_dir.display());

    // === Dependency Injection ===
    let provider = Arc::new(JsonFileContentProvider::new(&data_dir));
    let loader = LoadCatalogUseCase::new(provider);
    let Some(catalog) = load_with_retry(&loader).await? else {
        return Ok(());
    };

    if let Some(seed) = cli.seed {
        info!("Using seed {}", seed);
    }
    let rng = RngRandomSource::from_seed_option(cli.seed);
    let use_case = RunQuizUseCase::new(catalog, rng, config.quiz_config())
        .with_logger(event_logger(&config))
        .with_progress(ProgressMode::select(cli.quiet, io::stderr().is_terminal()).notifier());

    let mut repl = QuizRepl::new(use_case, locale).with_format(format);
    repl.run()?;

    Ok(())
}

/// Load the catalog, offering a retry after each failure
async fn load_with_retry(
    loader: &LoadCatalogUseCase<JsonFileContentProvider>,
) -> Result<Option<Arc<Catalog>>> {
    loop {
        match loader.execute().await {
            Ok(catalog) => return Ok(Some(catalog)),
            Err(e) => {
                eprintln!("{} {}", "Could not load quiz content:".red().bold(), e);
                eprint!("Retry? [y/N] ");
                io::stderr().flush()?;

                let mut line = String::new();
                io::stdin().lock().read_line(&mut line)?;
                if !matches!(line.trim().to_lowercase().as_str(), "y" | "yes") {
                    return Ok(None);
                }
            }
        }
    }
}

fn event_logger(config: &FileConfig) -> Arc<dyn QuizEventLogger> {
    match config
        .log
        .events_path()
        .and_then(JsonlQuizEventLogger::new)
    {
        Some(logger) => {
            info!("Writing quiz events to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoQuizEventLogger),
    }
}

fn report_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("{} {}", "Config error:".red().bold(), issue.message),
        }
    }
    if ConfigIssue::has_errors(issues) {
        anyhow::bail!("Invalid configuration");
    }
    Ok(())
}
