//! Logcrumb App - Process bootstrap
//!
//! `ProcessLifecycle` assembles the log router, its sinks and the crash
//! reporter once at startup and hands out shared handles for the rest of
//! the process.

pub mod lifecycle;

pub use lifecycle::{LifecycleError, ProcessLifecycle, LIFECYCLE_TAG};
