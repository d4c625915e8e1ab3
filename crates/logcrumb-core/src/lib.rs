//! Logcrumb Core - Domain types and port definitions
//!
//! This crate contains the pieces every other Logcrumb crate agrees on:
//! - **Domain** - `Severity` (priority labels), `LogEvent`, `FormattedLine`,
//!   `CrashReport`, `OsInfo` and the error types
//! - **Ports** - Traits for adapters: `ILogSink`, `ICustomDataStore`, `IReportSender`
//! - **Configuration** - YAML-backed `Config` with validation and a builder
//!
//! # Architecture
//!
//! The domain module is pure: formatting a log event never touches I/O.
//! Sinks, the crash reporter and report senders live in adapter crates and
//! meet here through the port traits.

pub mod config;
pub mod domain;
pub mod ports;
