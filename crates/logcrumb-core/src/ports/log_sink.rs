//! Log sink port
//!
//! A sink has exactly one responsibility: do something with a formatted
//! line. The router formats each event once and hands the same line to
//! every installed sink in installation order.

use crate::domain::FormattedLine;

/// Port trait for consumers of formatted log lines
///
/// ## Implementation Notes
///
/// - `accept` has no return value. Any failure (I/O, a missing file, a
///   rejected metadata write) must be absorbed inside the sink; logging
///   must never affect the caller's control flow.
/// - `accept` may be called concurrently from several threads.
pub trait ILogSink: Send + Sync {
    /// Consume one formatted line
    fn accept(&self, line: &FormattedLine);

    /// Short name used in diagnostics
    fn name(&self) -> &'static str;
}
