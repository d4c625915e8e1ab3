//! Logcrumb CLI - Command-line front end for the logging pipeline
//!
//! Provides commands for:
//! - Emitting events (single messages or piped stdin) through the router
//! - Forcing a crash report to check the pipeline end to end
//! - Browsing stored crash reports and the diagnostic log
//! - Inspecting configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use logcrumb_app::{ProcessLifecycle, LIFECYCLE_TAG};
use logcrumb_core::{config::Config, domain::Severity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod output;

use commands::{
    config::ConfigCommand, emit::EmitCommand, log::LogCommand, pipe::PipeCommand,
    report::ReportCommand, trigger::TriggerCommand, CliContext,
};
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "logcrumb", version, about = "Breadcrumb logging and crash reporting")]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Emit one event through the log router
    Emit(EmitCommand),
    /// Emit every line read from stdin as an event
    Pipe(PipeCommand),
    /// Force a test crash report
    Trigger(TriggerCommand),
    /// Manage stored crash reports
    #[command(subcommand)]
    Report(ReportCommand),
    /// Read the diagnostic log file
    #[command(subcommand)]
    Log(LogCommand),
    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Commands {
    /// Whether the command routes events and so needs the pipeline running.
    fn needs_pipeline(&self) -> bool {
        matches!(
            self,
            Commands::Emit(_) | Commands::Pipe(_) | Commands::Trigger(_)
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let config = if cli.config.is_some() {
        Config::load(&config_path)
            .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?
    } else {
        Config::load_or_default(&config_path)
    };

    let lifecycle = if cli.command.needs_pipeline() {
        Some(ProcessLifecycle::start(&config)?)
    } else {
        None
    };

    init_tracing(&config.logging.level, cli.verbose, lifecycle.as_ref());

    if let Some(lifecycle) = &lifecycle {
        lifecycle.install_panic_hook();
        lifecycle.log(
            Severity::Info,
            LIFECYCLE_TAG,
            &format!("logcrumb {} started", env!("CARGO_PKG_VERSION")),
        );
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };
    let ctx = CliContext::new(config, config_path, format, lifecycle);

    match cli.command {
        Commands::Emit(cmd) => cmd.execute(&ctx).await,
        Commands::Pipe(cmd) => cmd.execute(&ctx).await,
        Commands::Trigger(cmd) => cmd.execute(&ctx).await,
        Commands::Report(cmd) => cmd.execute(&ctx).await,
        Commands::Log(cmd) => cmd.execute(&ctx).await,
        Commands::Config(cmd) => cmd.execute(&ctx).await,
    }
}

/// Wire `tracing` into the router when the pipeline runs.
///
/// RUST_LOG wins over `-v`, which wins over `logging.level`. The fmt layer
/// is only added when no console sink already echoes lines to stderr.
fn init_tracing(level: &str, verbose: u8, lifecycle: Option<&ProcessLifecycle>) {
    let filter = match verbose {
        0 => level,
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let router_layer = lifecycle.map(ProcessLifecycle::tracing_layer);
    let has_console = lifecycle.is_some_and(|l| l.router().sink_names().contains(&"console"));
    let fmt_layer = (!has_console).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(router_layer)
        .with(fmt_layer)
        .init();
}
