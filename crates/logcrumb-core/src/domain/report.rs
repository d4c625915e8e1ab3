//! Crash report records
//!
//! A [`CrashReport`] is assembled by the crash reporter when a panic, a
//! handled error or a forced test report occurs. It carries the breadcrumb
//! metadata current at generation time in `custom_data`.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::os_info::OsInfo;

/// What caused a report to be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// An unrecovered panic
    Panic,
    /// An error the application caught and chose to report
    Handled,
    /// A report forced on purpose, e.g. to verify the pipeline
    Test,
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReportKind::Panic => "panic",
            ReportKind::Handled => "handled",
            ReportKind::Test => "test",
        };
        write!(f, "{}", s)
    }
}

/// A structured crash report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrashReport {
    pub id: String,
    pub timestamp: String,
    pub version: String,
    pub component: String,
    pub kind: ReportKind,
    pub message: String,
    pub location: String,
    pub backtrace: String,
    pub os_info: OsInfo,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_data: BTreeMap<String, String>,
}

impl CrashReport {
    /// Create a new report with a fresh id and timestamp.
    pub fn new(
        component: &str,
        kind: ReportKind,
        message: &str,
        location: &str,
        backtrace: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            component: component.to_string(),
            kind,
            message: message.to_string(),
            location: location.to_string(),
            backtrace: backtrace.to_string(),
            os_info: OsInfo::collect(),
            custom_data: BTreeMap::new(),
        }
    }

    /// Attach a snapshot of the custom metadata (breadcrumbs).
    pub fn with_custom_data(mut self, custom_data: BTreeMap<String, String>) -> Self {
        self.custom_data = custom_data;
        self
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
