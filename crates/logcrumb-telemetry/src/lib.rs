//! Logcrumb Telemetry - Crash reporting
//!
//! Provides:
//! - `ErrorReporter`: custom report metadata, sender registry and report
//!   generation for panics, handled errors and test reports
//! - `install_panic_hook`: panic hook that turns panics into reports
//! - `save_crash_report` / `LocalReportStore`: file-based report management
//! - `LocalStoreSender`: report sender that persists reports locally

pub mod crash_report;
pub mod reporter;
pub mod sender;
pub mod store;

pub use crash_report::{install_panic_hook, save_crash_report};
pub use reporter::ErrorReporter;
pub use sender::LocalStoreSender;
pub use store::{LocalReportStore, ReportEntry};
