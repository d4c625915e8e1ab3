//! Report command - Manage locally stored crash reports
//!
//! Provides the `logcrumb report` CLI command with subcommands:
//! - `list`: Show all saved reports
//! - `view <id>`: Display a specific report
//! - `delete`: Remove reports from local storage

use anyhow::Result;
use clap::Subcommand;
use logcrumb_core::domain::CrashReport;
use logcrumb_telemetry::LocalReportStore;

use super::CliContext;
use crate::output::get_formatter;

/// Report management subcommands
#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// List all saved crash reports
    List,
    /// View a specific report
    View {
        /// Report ID or filename fragment
        id: String,
        /// Show raw JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Delete reports from local storage
    Delete {
        /// Specific report ID to delete
        id: Option<String>,
        /// Delete all reports
        #[arg(long)]
        all: bool,
    },
}

impl ReportCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);
        let store = LocalReportStore::new(ctx.config.reports.dir.clone());

        match self {
            ReportCommand::List => {
                let entries = store.list()?;
                if ctx.format.is_json() {
                    let json: Vec<serde_json::Value> = entries
                        .iter()
                        .map(|e| {
                            serde_json::json!({
                                "id": e.id,
                                "type": e.report_type,
                                "date": e.date,
                                "size_bytes": e.size_bytes,
                            })
                        })
                        .collect();
                    formatter.print_json(&serde_json::json!(json));
                    return Ok(());
                }

                if entries.is_empty() {
                    formatter.info("No reports found.");
                    return Ok(());
                }

                println!("{:<12} {:<8} {:<12} {:>10}", "ID", "Type", "Date", "Size");
                println!("{}", "-".repeat(46));
                for entry in &entries {
                    println!(
                        "{:<12} {:<8} {:<12} {:>10}",
                        entry.id,
                        entry.report_type,
                        entry.date,
                        format_size(entry.size_bytes),
                    );
                }
                println!();
                println!("Total: {} report(s)", entries.len());
            }

            ReportCommand::View { id, json } => {
                if *json || ctx.format.is_json() {
                    match store.read(id)? {
                        Some(value) => println!(
                            "{}",
                            serde_json::to_string_pretty(&value).unwrap_or_default()
                        ),
                        None => formatter.error(&format!("Report '{}' not found", id)),
                    }
                    return Ok(());
                }

                match store.read_report(id)? {
                    Some(report) => print_report(&report),
                    None => formatter.error(&format!("Report '{}' not found", id)),
                }
            }

            ReportCommand::Delete { id, all } => {
                if *all {
                    let count = store.delete_all()?;
                    formatter.success(&format!("Deleted {} report(s)", count));
                } else if let Some(report_id) = id {
                    if store.delete(report_id)? {
                        formatter.success(&format!("Deleted report '{}'", report_id));
                    } else {
                        formatter.error(&format!("Report '{}' not found", report_id));
                    }
                } else {
                    formatter.error("Specify a report ID or use --all");
                }
            }
        }

        Ok(())
    }
}

fn print_report(report: &CrashReport) {
    println!("id:        {}", report.id);
    println!("kind:      {}", report.kind);
    println!("component: {} {}", report.component, report.version);
    println!("time:      {}", report.timestamp);
    println!(
        "os:        {} ({}, {}, {})",
        report.os_info.os, report.os_info.kernel, report.os_info.arch, report.os_info.desktop
    );
    if !report.location.is_empty() {
        println!("location:  {}", report.location);
    }
    println!();
    println!("{}", report.message);

    let crumbs = breadcrumbs_in_slot_order(report);
    if !crumbs.is_empty() {
        println!();
        println!("Breadcrumbs ({}):", crumbs.len());
        for (slot, line) in crumbs {
            println!("  {:>3} {}", slot, line.trim_end());
        }
    }

    if !report.backtrace.is_empty() {
        println!();
        println!("Backtrace:");
        println!("{}", report.backtrace);
    }
}

/// Breadcrumb entries sorted by numeric slot rather than key text.
fn breadcrumbs_in_slot_order(report: &CrashReport) -> Vec<(u32, &str)> {
    let mut crumbs: Vec<(u32, &str)> = report
        .custom_data
        .iter()
        .filter_map(|(key, value)| key.parse().ok().map(|slot| (slot, value.as_str())))
        .collect();
    crumbs.sort_by_key(|(slot, _)| *slot);
    crumbs
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
