//! CLI entrypoint for task-dispatch
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use dispatch_application::{DispatchRecorder, DispatchTaskUseCase, NoDispatchRecorder};
use dispatch_infrastructure::{ConfigLoader, JsonDispatchRecorder, MarkdownAgentRegistry};
use dispatch_presentation::{Cli, ConsoleFormatter, OutputFormat};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
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
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?
    };

    // Usage error: no scoring, no history, non-zero exit
    let task_text = match cli.task_text() {
        Some(text) => text,
        None => bail!("A task description is required.\nUsage: task-dispatch \"<task description>\""),
    };

    info!("Dispatching task: {}", task_text);

    // === Dependency Injection ===
    let registry = Arc::new(MarkdownAgentRegistry::new(&config.registry.path));
    let recorder: Arc<dyn DispatchRecorder> = if cli.no_history || !config.history.enabled {
        Arc::new(NoDispatchRecorder)
    } else {
        Arc::new(JsonDispatchRecorder::new(&config.history.dir))
    };

    if !cli.quiet {
        print!("{}", ConsoleFormatter::header(&task_text));
    }

    let use_case = DispatchTaskUseCase::new(registry, recorder);
    let outcome = use_case
        .execute(&task_text)
        .context("Could not dispatch the task")?;

    match cli.output {
        OutputFormat::Full => print!("{}", ConsoleFormatter::format(&outcome)),
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&outcome)),
    }

    Ok(())
}
