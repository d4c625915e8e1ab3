//! Domain error types
//!
//! Neither error ever escapes a sink or the router: sinks build them
//! internally and drop them at the `accept` boundary, and the crash
//! reporter swallows sender failures after logging them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised inside a sink while handling a line
#[derive(Debug, Error)]
pub enum SinkError {
    /// Creating the log file or its parent directories failed
    #[error("Failed to create log file {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending to the log file failed
    #[error("Failed to append to log file {path}: {source}")]
    Append {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors a report sender may return
#[derive(Debug, Error)]
pub enum ReportSendError {
    /// The report could not be serialized
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the report somewhere failed
    #[error("I/O error while sending report: {0}")]
    Io(#[from] std::io::Error),

    /// Any other sender-specific failure
    #[error("Report sender failed: {0}")]
    Other(String),
}
