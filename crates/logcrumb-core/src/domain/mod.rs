//! Domain entities
//!
//! This module contains the core domain types for Logcrumb:
//! - Severity levels and their one-letter labels
//! - Log events and the formatted line every sink receives
//! - Crash report records and the OS information attached to them
//! - Domain-specific error types

pub mod errors;
pub mod event;
pub mod os_info;
pub mod report;
pub mod severity;

// Re-export commonly used types
pub use errors::{ReportSendError, SinkError};
pub use event::{render_error_chain, FormattedLine, LogEvent};
pub use os_info::OsInfo;
pub use report::{CrashReport, ReportKind};
pub use severity::Severity;
