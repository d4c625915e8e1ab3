//! Port definitions (hexagonal architecture interfaces)
//!
//! ## Ports Overview
//!
//! - [`ILogSink`] - Consumers of formatted log lines (breadcrumbs, disk, console)
//! - [`ICustomDataStore`] - Key/value metadata attached to crash reports
//! - [`IReportSender`] - Consumers of assembled crash reports

pub mod crash_reporter;
pub mod log_sink;

pub use crash_reporter::{ICustomDataStore, IReportSender};
pub use log_sink::ILogSink;
