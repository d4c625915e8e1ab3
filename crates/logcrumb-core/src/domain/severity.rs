//! Log severity levels
//!
//! Severities use the classic numeric priorities (VERBOSE=2 through
//! ASSERT=7). Any other priority is carried as [`Severity::Other`] and
//! labelled with its decimal value.

use std::borrow::Cow;

/// Severity of a log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
    Assert,
    /// A priority outside the named range
    Other(i32),
}

impl Severity {
    /// Map a numeric priority to a severity.
    pub fn from_priority(priority: i32) -> Self {
        match priority {
            2 => Severity::Verbose,
            3 => Severity::Debug,
            4 => Severity::Info,
            5 => Severity::Warn,
            6 => Severity::Error,
            7 => Severity::Assert,
            other => Severity::Other(other),
        }
    }

    /// Numeric priority of this severity.
    pub fn priority(&self) -> i32 {
        match self {
            Severity::Verbose => 2,
            Severity::Debug => 3,
            Severity::Info => 4,
            Severity::Warn => 5,
            Severity::Error => 6,
            Severity::Assert => 7,
            Severity::Other(p) => *p,
        }
    }

    /// Label used as the line prefix.
    ///
    /// Named severities map to a single letter; anything else to the
    /// decimal string of its priority.
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            Severity::Verbose => Cow::Borrowed("V"),
            Severity::Debug => Cow::Borrowed("D"),
            Severity::Info => Cow::Borrowed("I"),
            Severity::Warn => Cow::Borrowed("W"),
            Severity::Error => Cow::Borrowed("E"),
            Severity::Assert => Cow::Borrowed("A"),
            Severity::Other(p) => Cow::Owned(p.to_string()),
        }
    }

    /// Parse a severity from a label (`E`), a name (`error`) or a numeric
    /// priority (`6`, `42`).
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if let Ok(priority) = trimmed.parse::<i32>() {
            return Some(Self::from_priority(priority));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "v" | "verbose" | "trace" => Some(Severity::Verbose),
            "d" | "debug" => Some(Severity::Debug),
            "i" | "info" => Some(Severity::Info),
            "w" | "warn" | "warning" => Some(Severity::Warn),
            "e" | "error" => Some(Severity::Error),
            "a" | "assert" => Some(Severity::Assert),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}
