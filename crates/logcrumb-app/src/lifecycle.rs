//! ProcessLifecycle - one-time assembly of the logging pipeline
//!
//! At startup the router is built with:
//! - a `BreadcrumbSink` feeding the crash reporter's custom data (always)
//! - a `ConsoleSink` and a `DiskSink` (diagnostic builds only)
//!
//! and the crash reporter gets its senders:
//! - diagnostic builds: reporting forced on, every sender removed and the
//!   `CrashReportBridge` installed as the only one, so reports end up in the
//!   log instead of leaving the process
//! - otherwise: a `LocalStoreSender` writing reports to `reports.dir`
//!
//! After that the sink list never changes. Nothing is torn down; the state
//! lives until the process exits.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use logcrumb_core::{
    config::Config,
    domain::{LogEvent, Severity},
};
use logcrumb_router::{
    BreadcrumbSink, ConsoleSink, CrashReportBridge, DiskSink, LogRouter, RouterLayer,
};
use logcrumb_telemetry::{install_panic_hook, ErrorReporter, LocalStoreSender};
use thiserror::Error;

/// Tag for lines emitted by the process bootstrap itself.
pub const LIFECYCLE_TAG: &str = "lifecycle";

static STARTED: AtomicBool = AtomicBool::new(false);

/// Errors that can occur while starting the process lifecycle
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// `start` was already called in this process
    #[error("Process lifecycle already started")]
    AlreadyStarted,

    /// The configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Process-scoped logging state, shared by handle.
pub struct ProcessLifecycle {
    router: Arc<LogRouter>,
    reporter: Arc<ErrorReporter>,
    diagnostic: bool,
    log_file: Option<PathBuf>,
}

impl ProcessLifecycle {
    /// Starts the lifecycle with a fresh crash reporter.
    ///
    /// Succeeds once per process; later calls return
    /// [`LifecycleError::AlreadyStarted`].
    pub fn start(config: &Config) -> Result<Self, LifecycleError> {
        check_config(config)?;
        if STARTED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(LifecycleError::AlreadyStarted);
        }
        let reporter = Arc::new(ErrorReporter::new(config.reports.component.clone()));
        Self::build(config, reporter)
    }

    /// Assembles the pipeline around an existing reporter.
    ///
    /// Nothing is logged while assembling; the only lines the sinks ever
    /// see are the ones callers emit.
    ///
    /// Unlike [`start`](Self::start) this is not limited to one call, which
    /// lets embedders and tests own the reporter.
    pub fn build(config: &Config, reporter: Arc<ErrorReporter>) -> Result<Self, LifecycleError> {
        check_config(config)?;
        let diagnostic = config.diagnostics.enabled;

        let mut router = LogRouter::new();
        router.install(Arc::new(BreadcrumbSink::new(reporter.clone())));

        let mut log_file = None;
        if diagnostic {
            if config.diagnostics.console {
                router.install(Arc::new(ConsoleSink::new()));
            }
            router.install(Arc::new(DiskSink::new(config.diagnostics.log_file.clone())));
            log_file = Some(config.diagnostics.log_file.clone());
        }
        let router = Arc::new(router);

        if diagnostic {
            reporter.set_enabled(true);
            reporter.remove_all_report_senders();
            reporter.add_report_sender(Arc::new(CrashReportBridge::new(Arc::clone(&router))));
        } else {
            reporter.set_enabled(config.reports.enabled);
            reporter.add_report_sender(Arc::new(LocalStoreSender::new(config.reports.dir.clone())));
        }

        Ok(Self {
            router,
            reporter,
            diagnostic,
            log_file,
        })
    }

    pub fn router(&self) -> &Arc<LogRouter> {
        &self.router
    }

    pub fn reporter(&self) -> &Arc<ErrorReporter> {
        &self.reporter
    }

    pub fn is_diagnostic(&self) -> bool {
        self.diagnostic
    }

    /// Log file written by the disk sink, when one is installed.
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Emit an event through the router.
    pub fn emit(&self, event: LogEvent) {
        self.router.emit(event);
    }

    /// Shorthand for emitting an event without a cause.
    pub fn log(&self, severity: Severity, tag: &str, message: &str) {
        self.router.log(severity, tag, message);
    }

    /// A tracing layer feeding this lifecycle's router.
    pub fn tracing_layer(&self) -> RouterLayer {
        RouterLayer::new(Arc::clone(&self.router))
    }

    /// Turn panics into crash reports for the rest of the process.
    pub fn install_panic_hook(&self) {
        install_panic_hook(Arc::clone(&self.reporter));
    }
}

fn check_config(config: &Config) -> Result<(), LifecycleError> {
    let errors = config.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let joined = errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    Err(LifecycleError::InvalidConfig(joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use logcrumb_core::config::ConfigBuilder;

    fn diagnostic_config(dir: &Path) -> Config {
        ConfigBuilder::new()
            .diagnostics_enabled(true)
            .diagnostics_console(false)
            .diagnostics_log_file(dir.join("logs").join("app.log"))
            .reports_dir(dir.join("reports"))
            .build()
    }

    #[test]
    fn test_diagnostic_build_installs_all_sinks() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::new()
            .diagnostics_enabled(true)
            .diagnostics_log_file(dir.path().join("app.log"))
            .build();
        let reporter = Arc::new(ErrorReporter::new("test"));

        let lifecycle = ProcessLifecycle::build(&config, reporter).unwrap();

        assert!(lifecycle.is_diagnostic());
        assert_eq!(
            lifecycle.router().sink_names(),
            vec!["breadcrumb", "console", "disk"]
        );
        assert_eq!(
            lifecycle.reporter().sender_names(),
            vec!["crash-report-bridge"]
        );
        assert_eq!(lifecycle.log_file(), Some(dir.path().join("app.log").as_path()));
    }

    #[test]
    fn test_diagnostic_build_replaces_existing_senders() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Arc::new(ErrorReporter::new("test"));
        reporter.add_report_sender(Arc::new(LocalStoreSender::new(dir.path().join("x"))));
        reporter.set_enabled(false);

        let lifecycle = ProcessLifecycle::build(&diagnostic_config(dir.path()), reporter).unwrap();

        assert!(lifecycle.reporter().is_enabled());
        assert_eq!(lifecycle.reporter().sender_count(), 1);
        assert_eq!(lifecycle.router().sink_names(), vec!["breadcrumb", "disk"]);
    }

    #[test]
    fn test_production_build_keeps_breadcrumbs_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigBuilder::new()
            .diagnostics_enabled(false)
            .diagnostics_log_file(dir.path().join("app.log"))
            .reports_dir(dir.path().join("reports"))
            .build();
        let reporter = Arc::new(ErrorReporter::new("test"));

        let lifecycle = ProcessLifecycle::build(&config, reporter).unwrap();

        assert!(!lifecycle.is_diagnostic());
        assert_eq!(lifecycle.router().sink_names(), vec!["breadcrumb"]);
        assert_eq!(lifecycle.reporter().sender_names(), vec!["local-store"]);
        assert!(lifecycle.log_file().is_none());

        lifecycle.log(Severity::Info, "t", "not on disk");
        assert!(!dir.path().join("app.log").exists());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ConfigBuilder::new().logging_level("shouting").build();
        let reporter = Arc::new(ErrorReporter::new("test"));

        let err = ProcessLifecycle::build(&config, reporter).err().unwrap();
        assert!(matches!(err, LifecycleError::InvalidConfig(ref m) if m.contains("logging.level")));
    }

    #[test]
    fn test_build_writes_no_lines_under_a_router_subscriber() {
        use tracing_subscriber::layer::SubscriberExt;

        let dir = tempfile::tempdir().unwrap();
        let outer_reporter = Arc::new(ErrorReporter::new("outer"));
        let outer = ProcessLifecycle::build(
            &diagnostic_config(&dir.path().join("outer")),
            outer_reporter.clone(),
        )
        .unwrap();

        let subscriber = tracing_subscriber::registry().with(outer.tracing_layer());
        tracing::subscriber::with_default(subscriber, || {
            let inner_dir = dir.path().join("inner");
            let inner_reporter = Arc::new(ErrorReporter::new("inner"));
            let inner =
                ProcessLifecycle::build(&diagnostic_config(&inner_dir), inner_reporter).unwrap();
            assert!(inner.is_diagnostic());
        });

        assert!(outer_reporter.custom_data().is_empty());
        assert!(!outer.log_file().unwrap().exists());
    }

    #[test]
    fn test_emit_reaches_breadcrumbs() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Arc::new(ErrorReporter::new("test"));
        let lifecycle =
            ProcessLifecycle::build(&diagnostic_config(dir.path()), reporter.clone()).unwrap();

        lifecycle.emit(LogEvent::new(Severity::Warn, LIFECYCLE_TAG, "hello"));

        assert_eq!(
            reporter.custom_data().get("0").map(String::as_str),
            Some("W/[lifecycle]\thello\n")
        );
    }
}
