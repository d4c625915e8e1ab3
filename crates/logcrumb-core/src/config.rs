//! Configuration module for Logcrumb.
//!
//! Provides typed configuration structs that map to the YAML configuration file,
//! with loading, validation, defaults, and a builder pattern for programmatic use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for Logcrumb.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diagnostics: DiagnosticsConfig,
    pub logging: LoggingConfig,
    pub reports: ReportsConfig,
}

/// Diagnostic-build settings.
///
/// With `enabled` set, the console and disk sinks are installed and crash
/// reports are turned into log lines instead of being stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Whether this process runs as a diagnostic build.
    pub enabled: bool,
    /// Echo every formatted line to stderr.
    pub console: bool,
    /// Append-only text log written by the disk sink.
    pub log_file: PathBuf,
}

/// Tracing settings for the subsystem's own logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

/// Crash report settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// Whether reports are generated at all outside diagnostic builds.
    pub enabled: bool,
    /// Directory where reports are stored as JSON files.
    pub dir: PathBuf,
    /// Component name recorded in every report.
    pub component: String,
}

// ---------------------------------------------------------------------------
// Config::load()
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/logcrumb/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("logcrumb")
            .join("config.yaml")
    }
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("logcrumb")
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
            console: true,
            log_file: data_dir().join("logcrumb.log"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: data_dir().join("reports"),
            component: "logcrumb".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config::validate()
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"logging.level"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- diagnostics ---
        if self.diagnostics.log_file.file_name().is_none() {
            errors.push(ValidationError {
                field: "diagnostics.log_file".into(),
                message: format!(
                    "must name a file, got '{}'",
                    self.diagnostics.log_file.display()
                ),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        // --- reports ---
        if self.reports.dir.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "reports.dir".into(),
                message: "must not be empty".into(),
            });
        }
        if self.reports.component.trim().is_empty() {
            errors.push(ValidationError {
                field: "reports.component".into(),
                message: "must not be empty".into(),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust,no_run
/// use logcrumb_core::config::ConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = ConfigBuilder::new()
///     .diagnostics_enabled(true)
///     .diagnostics_log_file(PathBuf::from("/tmp/app.log"))
///     .logging_level("debug")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder initialised with [`Config::default`] values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    // --- diagnostics ---

    pub fn diagnostics_enabled(mut self, enabled: bool) -> Self {
        self.config.diagnostics.enabled = enabled;
        self
    }

    pub fn diagnostics_console(mut self, console: bool) -> Self {
        self.config.diagnostics.console = console;
        self
    }

    pub fn diagnostics_log_file(mut self, file: PathBuf) -> Self {
        self.config.diagnostics.log_file = file;
        self
    }

    // --- logging ---

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    // --- reports ---

    pub fn reports_enabled(mut self, enabled: bool) -> Self {
        self.config.reports.enabled = enabled;
        self
    }

    pub fn reports_dir(mut self, dir: PathBuf) -> Self {
        self.config.reports.dir = dir;
        self
    }

    pub fn reports_component(mut self, component: impl Into<String>) -> Self {
        self.config.reports.component = component.into();
        self
    }

    // --- build ---

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate in one step. Returns `Err` with the list of
    /// validation errors if the configuration is invalid.
    pub fn build_validated(self) -> Result<Config, Vec<ValidationError>> {
        let config = self.build();
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
