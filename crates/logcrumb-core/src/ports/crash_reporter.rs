//! Crash reporter ports
//!
//! The logging side only needs two things from a crash reporter: a place
//! to put custom metadata that will ride along with the next report, and
//! a way to be handed an assembled report.
//!
//! ## Design Notes
//!
//! - Metadata writes are infallible from the caller's point of view.
//! - A sender may fail; the reporter swallows the failure and moves on to
//!   the next sender.

use crate::domain::{CrashReport, ReportSendError};

/// Port trait for the metadata attached to generated crash reports
pub trait ICustomDataStore: Send + Sync {
    /// Remove every stored key
    fn clear_custom_data(&self);

    /// Store `value` under `key`, replacing any previous value
    fn put_custom_data(&self, key: &str, value: &str);
}

/// Port trait for consumers of assembled crash reports
///
/// Senders are terminal: handling a report must not cause another report
/// to be generated.
pub trait IReportSender: Send + Sync {
    /// Deliver one report
    fn send(&self, report: &CrashReport) -> Result<(), ReportSendError>;

    /// Short name used in diagnostics
    fn name(&self) -> &'static str;
}
