//! CLI entrypoint for sentiment-vectorizer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod settings;

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use sentiment_application::{
    AnalysisConfig, AnalysisLogger, AnalyzeSentimentsUseCase, InlineSentimentSource,
    NoAnalysisLogger, SentimentSource,
};
use sentiment_domain::{AnalysisReport, combine_all};
use sentiment_infrastructure::{ConfigLoader, JsonlAnalysisLogger, JsonlSentimentSource};
use sentiment_presentation::{Cli, Command, formatter_for};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting sentiment-vectorizer");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    debug!("Loaded configuration: {:?}", config);

    if !settings::use_color(cli.no_color, &config) {
        colored::control::set_override(false);
    }

    let formatter = formatter_for(settings::output_format(cli.output, &config));

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Command::Combine { vectors } => {
            let result = combine_all(vectors.iter().copied())
                .context("At least one vector is required")?;
            println!("{}", formatter.format_combination(&vectors, &result));
        }
        Command::Score { vector } => {
            println!("{}", formatter.format_score(&vector));
        }
        Command::Analyze {
            input,
            vectors,
            alpha,
            beta,
            analysis_log,
        } => {
            let analysis_config = settings::analysis_config(&config, alpha, beta)?;
            let logger =
                analysis_logger(analysis_log.or_else(|| config.logging.analysis_log.clone()));

            let report = match input {
                Some(path) => {
                    let source = Arc::new(JsonlSentimentSource::new(path));
                    run_analysis(source, logger, &analysis_config).await?
                }
                None => {
                    if vectors.is_empty() {
                        bail!("No vectors given. Pass --input <PATH> or vectors as arguments.");
                    }
                    let source = Arc::new(InlineSentimentSource::new(vectors));
                    run_analysis(source, logger, &analysis_config).await?
                }
            };

            println!("{}", formatter.format_report(&report));
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn analysis_logger(path: Option<PathBuf>) -> Arc<dyn AnalysisLogger> {
    match path.and_then(JsonlAnalysisLogger::new) {
        Some(logger) => {
            info!("Writing analysis log to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoAnalysisLogger),
    }
}

async fn run_analysis<S>(
    source: Arc<S>,
    logger: Arc<dyn AnalysisLogger>,
    config: &AnalysisConfig,
) -> Result<AnalysisReport>
where
    S: SentimentSource + 'static,
{
    let use_case = AnalyzeSentimentsUseCase::new(source).with_logger(logger);
    Ok(use_case.execute(config).await?)
}
