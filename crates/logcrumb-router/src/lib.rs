//! Logcrumb Router - Log fan-out and sinks
//!
//! Provides:
//! - `LogRouter`: formats each event once and hands the line to every sink
//! - `BreadcrumbSink`: rotating window of the last 200 lines kept as crash
//!   report metadata
//! - `DiskSink`: lazily created append-only log file
//! - `ConsoleSink`: stderr echo for diagnostic builds
//! - `CrashReportBridge`: turns assembled crash reports back into log lines
//! - `RouterLayer`: feeds `tracing` events into a router

pub mod bridge;
pub mod layer;
pub mod router;
pub mod sinks;

pub use bridge::{CrashReportBridge, BRIDGE_TAG};
pub use layer::RouterLayer;
pub use router::LogRouter;
pub use sinks::{BreadcrumbSink, ConsoleSink, DiskSink, BREADCRUMB_CAPACITY};
