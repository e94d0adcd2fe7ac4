//! CLI entrypoint for ideaforge
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use ideaforge_application::{RunSessionInput, RunSessionUseCase};
use ideaforge_domain::RandomSource;
use ideaforge_infrastructure::{
    ConfigLoader, FileConfig, HttpBackend, InMemoryResponseCache, JsonlConversationLogger,
    RetryingBackend, SeededRandom, ThreadRandom,
};
use ideaforge_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress, load_context};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_cli_overrides(&cli, &mut config);

    let log_file = config.logging.file.clone();
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;
    ConsoleFormatter::set_color(config.output.color && !cli.no_color);

    if cli.show_config {
        println!("Configuration sources (in priority order):");
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        println!();
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let prompt = match cli.prompt {
        Some(ref p) if !p.trim().is_empty() => p.clone(),
        _ => bail!("A prompt is required. Example: ideaforge \"sustainable urban transport\""),
    };

    config.validate()?;
    info!("Starting ideaforge");

    // === Dependency Injection ===
    let registry = Arc::new(config.persona_registry()?);
    let backend = Arc::new(RetryingBackend::new(
        HttpBackend::new(config.backend.http_config())?,
        config.backend.retry.policy(),
    ));
    let random: Arc<dyn RandomSource> = match cli.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(ThreadRandom),
    };

    let mut use_case =
        RunSessionUseCase::new(backend, registry, random, config.orchestration_config());
    if config.cache.enabled {
        use_case = use_case.with_cache(Arc::new(InMemoryResponseCache::new(
            config.cache.ttl(),
            config.cache.max_entries,
        )));
    }
    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::new(path) {
            Ok(logger) => {
                info!("Conversation log: {}", path.display());
                use_case = use_case.with_conversation_logger(Arc::new(logger));
            }
            Err(e) => warn!("Could not open conversation log {}: {}", path.display(), e),
        }
    }

    let context = match &cli.context {
        Some(path) => load_context(path)?,
        None => Vec::new(),
    };
    let input = RunSessionInput::new(prompt).with_context(context);

    // progress bars only when stderr is a terminal
    let outcome = if cli.quiet {
        use_case.execute(input).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    };

    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    print!("{}", ConsoleFormatter::render(&outcome, format));

    Ok(())
}

/// Command-line flags take precedence over every config source
fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(secs) = cli.expansion_budget_secs {
        config.phases.expansion_budget_secs = secs;
    }
    if let Some(secs) = cli.session_budget_secs {
        config.phases.session_budget_secs = secs;
    }
    if cli.no_cache {
        config.cache.enabled = false;
    }
    if cli.log_file.is_some() {
        config.logging.file = cli.log_file.clone();
    }
    if cli.conversation_log.is_some() {
        config.logging.conversation_log = cli.conversation_log.clone();
    }
}

/// `-v` flags win over `RUST_LOG`; logs go to stderr and optionally a file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let stderr_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .init();
    Ok(Some(guard))
}
