//! Pipe command - Emit each stdin line as an event

use anyhow::{Context, Result};
use clap::Args;
use logcrumb_core::domain::Severity;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use super::{parse_severity, CliContext};
use crate::output::get_formatter;

#[derive(Debug, Args)]
pub struct PipeCommand {
    /// Severity applied to every line
    #[arg(short, long, default_value = "I", value_parser = parse_severity)]
    severity: Severity,

    /// Tag applied to every line
    #[arg(short, long, default_value = "stdin")]
    tag: String,
}

impl PipeCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);
        let lifecycle = ctx.lifecycle()?;

        let stdin = BufReader::new(tokio::io::stdin());
        let count = forward_lines(stdin, |line| {
            lifecycle.log(self.severity, &self.tag, line);
        })
        .await?;

        if ctx.format.is_json() {
            formatter.print_json(&serde_json::json!({ "emitted": count }));
        } else {
            formatter.success(&format!("Emitted {} line(s)", count));
        }
        Ok(())
    }
}

/// Hand every non-blank line of `reader` to `emit`, returning how many were sent.
async fn forward_lines<R, F>(reader: R, mut emit: F) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    F: FnMut(&str),
{
    let mut lines = reader.lines();
    let mut count = 0;
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }
        emit(line);
        count += 1;
    }
    Ok(count)
}
