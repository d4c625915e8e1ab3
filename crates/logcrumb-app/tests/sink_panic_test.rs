//! A sink that panics while the panic hook and the bridge are installed.
//! The hook is process-wide, so this gets a test binary of its own.

use std::sync::{Arc, Mutex};

use logcrumb_core::{
    domain::{CrashReport, FormattedLine, ReportKind, ReportSendError, Severity},
    ports::{ILogSink, IReportSender},
};
use logcrumb_router::{BreadcrumbSink, CrashReportBridge, DiskSink, LogRouter};
use logcrumb_telemetry::{install_panic_hook, ErrorReporter};

struct PanickingSink;

impl ILogSink for PanickingSink {
    fn accept(&self, _line: &FormattedLine) {
        panic!("sink exploded");
    }

    fn name(&self) -> &'static str {
        "panicking"
    }
}

#[derive(Default)]
struct RecordingSender {
    kinds: Mutex<Vec<ReportKind>>,
}

impl IReportSender for RecordingSender {
    fn send(&self, report: &CrashReport) -> Result<(), ReportSendError> {
        self.kinds.lock().unwrap().push(report.kind);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[test]
fn test_panicking_sink_with_hook_and_bridge_does_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    let log_file = dir.path().join("app.log");
    let reporter = Arc::new(ErrorReporter::new("sink-panic"));

    let mut router = LogRouter::new();
    router.install(Arc::new(BreadcrumbSink::new(reporter.clone())));
    router.install(Arc::new(PanickingSink));
    router.install(Arc::new(DiskSink::new(log_file.clone())));
    let router = Arc::new(router);

    let recorder = Arc::new(RecordingSender::default());
    reporter.add_report_sender(Arc::new(CrashReportBridge::new(Arc::clone(&router))));
    reporter.add_report_sender(recorder.clone());
    install_panic_hook(reporter.clone());

    router.log(Severity::Info, "t", "hello");
    router.log(Severity::Info, "t", "again");

    // Each sink panic was reported once; the bridged copy was not routed
    // back into the sinks mid-panic.
    assert_eq!(
        *recorder.kinds.lock().unwrap(),
        vec![ReportKind::Panic, ReportKind::Panic]
    );
    let content = std::fs::read_to_string(&log_file).unwrap();
    assert_eq!(content, "I/[t]\thello\nI/[t]\tagain\n");

    let crumbs = reporter.custom_data();
    assert_eq!(crumbs.len(), 2);
    assert_eq!(crumbs["1"], "I/[t]\tagain\n");
}
