//! Log command - Read the diagnostic log file

use anyhow::{Context, Result};
use clap::Subcommand;

use super::CliContext;
use crate::output::get_formatter;

#[derive(Debug, Subcommand)]
pub enum LogCommand {
    /// Print the last lines of the diagnostic log
    Show {
        /// Number of lines to print
        #[arg(short = 'n', long, default_value_t = 50)]
        lines: usize,
    },
}

impl LogCommand {
    pub async fn execute(&self, ctx: &CliContext) -> Result<()> {
        let formatter = get_formatter(ctx.format);
        let path = &ctx.config.diagnostics.log_file;

        match self {
            LogCommand::Show { lines } => {
                if !path.exists() {
                    formatter.info(&format!("No log file at {}", path.display()));
                    if !ctx.config.diagnostics.enabled {
                        formatter.info("The disk sink only runs with diagnostics.enabled = true");
                    }
                    return Ok(());
                }

                let content = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let tail = tail_lines(&content, *lines);

                if ctx.format.is_json() {
                    formatter.print_json(&serde_json::json!({
                        "path": path.display().to_string(),
                        "lines": tail,
                    }));
                } else {
                    for line in tail {
                        println!("{}", line);
                    }
                }
            }
        }

        Ok(())
    }
}

fn tail_lines(content: &str, count: usize) -> Vec<&str> {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_lines() {
        let content = "I/[a]\t1\nI/[a]\t2\nI/[a]\t3\n";
        assert_eq!(tail_lines(content, 2), vec!["I/[a]\t2", "I/[a]\t3"]);
        assert_eq!(tail_lines(content, 10).len(), 3);
        assert!(tail_lines(content, 0).is_empty());
        assert!(tail_lines("", 5).is_empty());
    }
}
