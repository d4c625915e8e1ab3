//! CLI command implementations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use logcrumb_app::ProcessLifecycle;
use logcrumb_core::{config::Config, domain::Severity};

use crate::output::OutputFormat;

pub mod config;
pub mod emit;
pub mod log;
pub mod pipe;
pub mod report;
pub mod trigger;

/// State shared by every command
pub struct CliContext {
    pub config: Config,
    config_path: PathBuf,
    pub format: OutputFormat,
    lifecycle: Option<ProcessLifecycle>,
}

impl CliContext {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        format: OutputFormat,
        lifecycle: Option<ProcessLifecycle>,
    ) -> Self {
        Self {
            config,
            config_path,
            format,
            lifecycle,
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The running pipeline; only started for commands that route events.
    pub fn lifecycle(&self) -> Result<&ProcessLifecycle> {
        self.lifecycle
            .as_ref()
            .context("Logging pipeline is not running for this command")
    }
}

/// clap value parser for `--severity`.
pub fn parse_severity(input: &str) -> Result<Severity, String> {
    Severity::parse(input).ok_or_else(|| {
        format!("unknown severity '{input}' (expected V, D, I, W, E, A, a name or a number)")
    })
}
