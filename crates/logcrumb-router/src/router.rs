//! LogRouter - formats events once and fans them out
//!
//! Sinks are installed through `&mut self` while the router is still being
//! assembled; once it is shared (typically behind an `Arc`) the sink list
//! is read-only, so `emit` needs no locking of its own.
//!
//! A thread that is already inside `emit` drops any nested `emit`, so a
//! crash report raised by a panicking sink never reaches the sinks again
//! while that panic is being processed.

use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use logcrumb_core::{
    domain::{LogEvent, Severity},
    ports::ILogSink,
};

thread_local! {
    static EMITTING: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as inside `emit` until dropped.
struct EmitGuard;

impl EmitGuard {
    fn enter() -> Option<Self> {
        EMITTING
            .try_with(|emitting| {
                if emitting.get() {
                    None
                } else {
                    emitting.set(true);
                    Some(EmitGuard)
                }
            })
            .ok()
            .flatten()
    }
}

impl Drop for EmitGuard {
    fn drop(&mut self) {
        let _ = EMITTING.try_with(|emitting| emitting.set(false));
    }
}

/// Fan-out point between log producers and sinks.
#[derive(Default)]
pub struct LogRouter {
    sinks: Vec<Arc<dyn ILogSink>>,
}

impl LogRouter {
    /// Creates a router with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Registers a sink for the rest of the router's lifetime.
    pub fn install(&mut self, sink: Arc<dyn ILogSink>) {
        self.sinks.push(sink);
    }

    /// Number of installed sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Names of the installed sinks, in installation order.
    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    /// Formats `event` and delivers the line to every sink in order.
    ///
    /// A sink that panics is skipped; the remaining sinks still receive
    /// the line and nothing propagates to the caller. Called from inside a
    /// sink on the same thread, the event is dropped.
    pub fn emit(&self, event: LogEvent) {
        let Some(_guard) = EmitGuard::enter() else {
            return;
        };
        let line = event.format();
        for sink in &self.sinks {
            let _ = panic::catch_unwind(AssertUnwindSafe(|| sink.accept(&line)));
        }
    }

    /// Shorthand for emitting an event without a cause.
    pub fn log(&self, severity: Severity, tag: &str, message: &str) {
        self.emit(LogEvent::new(severity, tag, message));
    }
}

impl std::fmt::Debug for LogRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogRouter")
            .field("sinks", &self.sink_names())
            .finish()
    }
}
