//! LocalStoreSender - keeps reports on local disk
//!
//! Used outside diagnostic builds in place of a network transport.

use std::path::{Path, PathBuf};

use logcrumb_core::{
    domain::{CrashReport, ReportSendError},
    ports::IReportSender,
};

use crate::crash_report::save_crash_report;

/// Report sender that writes each report into a directory.
pub struct LocalStoreSender {
    reports_dir: PathBuf,
}

impl LocalStoreSender {
    pub fn new(reports_dir: PathBuf) -> Self {
        Self { reports_dir }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }
}

impl IReportSender for LocalStoreSender {
    fn send(&self, report: &CrashReport) -> Result<(), ReportSendError> {
        let path = save_crash_report(&self.reports_dir, report)
            .map_err(|e| ReportSendError::Other(format!("{e:#}")))?;
        tracing::debug!(path = %path.display(), "Saved crash report");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "local-store"
    }
}
