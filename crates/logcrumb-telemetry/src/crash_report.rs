//! Crash report persistence and the panic hook
//!
//! Reports are saved as pretty JSON to `<reports_dir>/<kind>-<date>-<id8>.json`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use logcrumb_core::domain::CrashReport;

use crate::reporter::ErrorReporter;

/// Save a crash report to the reports directory.
///
/// Creates the directory if needed. File name: `{kind}-{date}-{uuid8}.json`
pub fn save_crash_report(reports_dir: &Path, report: &CrashReport) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(reports_dir)?;

    let date = Utc::now().format("%Y%m%d");
    let short_id: String = report.id.chars().take(8).collect();
    let filename = format!("{}-{date}-{short_id}.json", report.kind);
    let path = reports_dir.join(filename);

    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)?;

    Ok(path)
}

/// Installs a panic hook that hands every panic to `reporter`.
///
/// Chains with the existing panic hook so default behavior (stderr output)
/// is preserved.
pub fn install_panic_hook(reporter: Arc<ErrorReporter>) {
    let previous_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_default();

        reporter.report_panic(&message, &location);

        // Call the previous panic hook
        previous_hook(panic_info);
    }));
}
