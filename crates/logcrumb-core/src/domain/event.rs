//! Log events and formatted lines
//!
//! A [`LogEvent`] is what callers produce; a [`FormattedLine`] is what every
//! sink receives. Formatting is pure and total:
//!
//! ```text
//! <label>/[<tag>]\t<message>\n
//! ```

use std::error::Error as StdError;
use std::sync::Arc;

use super::severity::Severity;

/// Shareable error attached to an event as its cause
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// A single log event, immutable once constructed
#[derive(Debug, Clone)]
pub struct LogEvent {
    severity: Severity,
    tag: String,
    message: String,
    cause: Option<Cause>,
}

impl LogEvent {
    /// Creates a new event without a cause
    pub fn new(severity: Severity, tag: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            tag: tag.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Attaches the error that caused this event
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Attaches an already shared cause
    pub fn with_shared_cause(mut self, cause: Cause) -> Self {
        self.cause = Some(cause);
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Formats this event into the line handed to sinks.
    pub fn format(&self) -> FormattedLine {
        FormattedLine::from_event(self)
    }

    /// The message body, with the rendered cause chain appended when present.
    fn full_message(&self) -> String {
        match &self.cause {
            None => self.message.clone(),
            Some(cause) => format!("{}\n{}", self.message, render_error_chain(&**cause)),
        }
    }
}

/// Renders an error and its `source()` chain, one `Caused by:` line per
/// source.
pub fn render_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut out = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&err.to_string());
        source = err.source();
    }
    out
}

/// A formatted log line, ready for delivery to sinks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormattedLine(String);

impl FormattedLine {
    pub fn from_event(event: &LogEvent) -> Self {
        Self(format!(
            "{}/[{}]\t{}\n",
            event.severity.label(),
            event.tag,
            event.full_message()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for FormattedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FormattedLine {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
