//! CrashReportBridge - crash reports back into the log
//!
//! Registered with the crash reporter as a report sender. Each assembled
//! report is serialized to JSON and emitted as a single `ERROR` event
//! tagged [`BRIDGE_TAG`]. The bridge only holds the router, so it has no
//! way to ask for another report.
//!
//! Installed as the only sender, it replaces report delivery entirely
//! (the report is logged, then dropped). Installed next to other senders
//! it is purely additive.

use std::sync::Arc;

use logcrumb_core::{
    domain::{CrashReport, LogEvent, ReportSendError, Severity},
    ports::IReportSender,
};

use crate::router::LogRouter;

/// Tag of every event the bridge emits.
pub const BRIDGE_TAG: &str = "CrashReportBridge";

/// Report sender that logs reports through a [`LogRouter`].
pub struct CrashReportBridge {
    router: Arc<LogRouter>,
}

impl CrashReportBridge {
    pub fn new(router: Arc<LogRouter>) -> Self {
        Self { router }
    }

    fn serialize(report: &CrashReport) -> Result<String, ReportSendError> {
        Ok(report.to_json()?)
    }
}

impl IReportSender for CrashReportBridge {
    fn send(&self, report: &CrashReport) -> Result<(), ReportSendError> {
        // Sits on the crash path: a report that cannot be serialized is
        // dropped without a trace.
        if let Ok(json) = Self::serialize(report) {
            self.router
                .emit(LogEvent::new(Severity::Error, BRIDGE_TAG, json));
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "crash-report-bridge"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logcrumb_core::{
        domain::{FormattedLine, ReportKind},
        ports::ILogSink,
    };
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl ILogSink for RecordingSink {
        fn accept(&self, line: &FormattedLine) {
            self.lines.lock().unwrap().push(line.as_str().to_string());
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    #[test]
    fn test_report_becomes_one_error_line() {
        let recorder = Arc::new(RecordingSink::default());
        let mut router = LogRouter::new();
        router.install(recorder.clone());
        let bridge = CrashReportBridge::new(Arc::new(router));

        let report = CrashReport::new("app", ReportKind::Test, "synthetic", "main.rs:1:1", "");
        bridge.send(&report).unwrap();

        let lines = recorder.lines.lock().unwrap().clone();
        assert_eq!(lines.len(), 1);
        let prefix = format!("E/[{BRIDGE_TAG}]\t");
        assert!(lines[0].starts_with(&prefix));
        assert!(lines[0].ends_with('\n'));

        let json = &lines[0][prefix.len()..lines[0].len() - 1];
        let parsed: CrashReport = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, report.id);
        assert_eq!(parsed.message, "synthetic");
    }

    #[test]
    fn test_send_never_fails() {
        let bridge = CrashReportBridge::new(Arc::new(LogRouter::new()));
        let report = CrashReport::new("app", ReportKind::Panic, "boom", "", "");
        assert!(bridge.send(&report).is_ok());
    }
}
