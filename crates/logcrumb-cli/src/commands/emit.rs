//! Emit command - Send one event through the log router
//!
//! `logcrumb emit -s E -t net "connection lost"` formats the event exactly
//! as any in-process caller would and hands it to every installed sink.

use anyhow::Result;
use clap::Args;
use logcrumb_core::domain::{FormattedLine, LogEvent, Severity};

use super::{parse_severity, CliContext};
use crate::output::get_formatter;

#[derive(Debug, Args)]
pub struct EmitCommand {
    /// Severity: V, D, I, W, E, A, a level name or a numeric priority
    #[arg(short, long, default_value = "I", value_parser = parse_severity)]
    severity: Severity,

    /// Tag identifying the event source
    #[arg(short, long, default_value = "logcrumb")]
    tag: String,

    /// Message text (joined with spaces)
    #[arg(required = true)]
    message: Vec<String>,
}

impl EmitCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);
        let lifecycle = ctx.lifecycle()?;

        let event = LogEvent::new(self.severity, self.tag.as_str(), self.message.join(" "));
        let line = FormattedLine::from_event(&event);
        lifecycle.emit(event);

        if ctx.format.is_json() {
            formatter.print_json(&serde_json::json!({
                "line": line.as_str(),
                "sinks": lifecycle.router().sink_names(),
            }));
        } else {
            formatter.success(&format!(
                "Emitted to {} sink(s)",
                lifecycle.router().sink_count()
            ));
            formatter.info(line.as_str().trim_end());
        }

        Ok(())
    }
}
