//! ErrorReporter - in-process crash reporter
//!
//! Holds the custom metadata that rides along with every report (the
//! breadcrumbs), the list of registered report senders, and the logic that
//! assembles a [`CrashReport`] and hands it to each sender.
//!
//! A report requested while the same thread is still delivering a report
//! is dropped. Senders can therefore reach code that would normally report
//! (a sink, a panicking helper) without ever producing a second report.

use std::backtrace::Backtrace;
use std::cell::Cell;
use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use logcrumb_core::{
    domain::{render_error_chain, CrashReport, ReportKind},
    ports::{ICustomDataStore, IReportSender},
};

thread_local! {
    static DELIVERING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as delivering a report until dropped.
struct DeliveryGuard;

impl DeliveryGuard {
    fn enter() -> Option<Self> {
        DELIVERING
            .try_with(|delivering| {
                if delivering.get() {
                    None
                } else {
                    delivering.set(true);
                    Some(DeliveryGuard)
                }
            })
            .ok()
            .flatten()
    }
}

impl Drop for DeliveryGuard {
    fn drop(&mut self) {
        let _ = DELIVERING.try_with(|delivering| delivering.set(false));
    }
}

/// In-process crash reporter.
pub struct ErrorReporter {
    component: String,
    enabled: AtomicBool,
    custom_data: DashMap<String, String>,
    senders: RwLock<Vec<Arc<dyn IReportSender>>>,
}

impl ErrorReporter {
    /// Creates an enabled reporter with no senders.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            enabled: AtomicBool::new(true),
            custom_data: DashMap::new(),
            senders: RwLock::new(Vec::new()),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// A disabled reporter generates nothing.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    /// Sorted snapshot of the custom metadata.
    pub fn custom_data(&self) -> BTreeMap<String, String> {
        self.custom_data
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    // ========================================================================
    // Sender registry
    // ========================================================================

    pub fn add_report_sender(&self, sender: Arc<dyn IReportSender>) {
        self.senders
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(sender);
    }

    pub fn remove_all_report_senders(&self) {
        self.senders
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    pub fn sender_count(&self) -> usize {
        self.senders
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn sender_names(&self) -> Vec<&'static str> {
        self.senders
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .map(|s| s.name())
            .collect()
    }

    // ========================================================================
    // Report generation
    // ========================================================================

    /// Report an unrecovered panic.
    pub fn report_panic(&self, message: &str, location: &str) -> Option<String> {
        self.generate(ReportKind::Panic, message, location)
    }

    /// Report an error the caller handled but wants recorded.
    pub fn report_error(&self, error: &(dyn StdError + 'static)) -> Option<String> {
        self.generate(ReportKind::Handled, &render_error_chain(error), "")
    }

    /// Force a report, e.g. to check the pipeline end to end.
    pub fn report_test(&self, message: &str) -> Option<String> {
        self.generate(ReportKind::Test, message, "")
    }

    /// Assembles one report and delivers it to every sender.
    ///
    /// Returns the report id, or `None` when the reporter is disabled or the
    /// thread is already delivering a report.
    fn generate(&self, kind: ReportKind, message: &str, location: &str) -> Option<String> {
        if !self.is_enabled() {
            return None;
        }
        let _guard = DeliveryGuard::enter()?;

        let backtrace = Backtrace::force_capture().to_string();
        let report = CrashReport::new(&self.component, kind, message, location, &backtrace)
            .with_custom_data(self.custom_data());

        let senders = self
            .senders
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        for sender in senders {
            match panic::catch_unwind(AssertUnwindSafe(|| sender.send(&report))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(sender = sender.name(), error = %e, "Report sender failed");
                }
                Err(_) => {
                    tracing::warn!(sender = sender.name(), "Report sender panicked");
                }
            }
        }

        Some(report.id)
    }
}

impl ICustomDataStore for ErrorReporter {
    fn clear_custom_data(&self) {
        self.custom_data.clear();
    }

    fn put_custom_data(&self, key: &str, value: &str) {
        self.custom_data.insert(key.to_string(), value.to_string());
    }
}

impl std::fmt::Debug for ErrorReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorReporter")
            .field("component", &self.component)
            .field("enabled", &self.is_enabled())
            .field("custom_data_keys", &self.custom_data.len())
            .field("senders", &self.sender_names())
            .finish()
    }
}
