//! ConsoleSink - echoes lines to stderr in diagnostic builds

use std::io::Write;

use logcrumb_core::{domain::FormattedLine, ports::ILogSink};

/// Sink that writes each line to stderr.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ILogSink for ConsoleSink {
    fn accept(&self, line: &FormattedLine) {
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_str().as_bytes());
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
