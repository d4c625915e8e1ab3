//! Trigger command - Force a test crash report
//!
//! In a diagnostic build the report is bridged into the log; otherwise it is
//! stored under `reports.dir`.

use anyhow::Result;
use clap::Args;
use logcrumb_core::domain::Severity;

use super::CliContext;
use crate::output::get_formatter;

#[derive(Debug, Args)]
pub struct TriggerCommand {
    /// Message recorded in the report
    #[arg(default_value = "Test report from logcrumb trigger")]
    message: String,
}

impl TriggerCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);
        let lifecycle = ctx.lifecycle()?;

        lifecycle.log(Severity::Debug, "trigger", "requesting test report");
        let id = lifecycle.reporter().report_test(&self.message);

        let destination = if lifecycle.is_diagnostic() {
            lifecycle
                .log_file()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        } else {
            ctx.config.reports.dir.display().to_string()
        };

        if ctx.format.is_json() {
            formatter.print_json(&serde_json::json!({
                "generated": id.is_some(),
                "id": id,
                "diagnostic": lifecycle.is_diagnostic(),
                "destination": destination,
            }));
            return Ok(());
        }

        match id {
            Some(id) => {
                formatter.success(&format!("Generated report {}", id));
                if lifecycle.is_diagnostic() {
                    formatter.info(&format!("Written to log {}", destination));
                } else {
                    formatter.info(&format!("Stored in {}", destination));
                }
            }
            None => formatter.warn("Crash reporting is disabled (reports.enabled = false)"),
        }
        Ok(())
    }
}
