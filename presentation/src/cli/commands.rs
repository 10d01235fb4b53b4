//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for dispatch results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Formatted console report
    Full,
    /// JSON output
    Json,
}

/// CLI arguments for task-dispatch
#[derive(Parser, Debug)]
#[command(name = "task-dispatch")]
#[command(version, about = "Route a task description to the best-matching agent")]
#[command(long_about = r#"
task-dispatch scores every agent in the registry against a task description
and routes the task to the highest scorer. Scores combine keyword matches,
detected domain patterns, and description-word overlap; ties break toward
the agent listed first, and an all-zero scoreboard falls back to the
synthetic "general" agent.

Every decision is appended to a bounded history log for later audit.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./dispatch.toml     Project-level config
3. <config_dir>/task-dispatch/config.toml   Global config

Example:
  task-dispatch "Design a new REST API endpoint"
  task-dispatch --output json fix the flaky e2e tests
"#)]
pub struct Cli {
    /// The task description to route (trailing words are joined with spaces)
    #[arg(value_name = "TASK")]
    pub task: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the decorative report header
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Skip history recording for this dispatch
    #[arg(long)]
    pub no_history: bool,
}

impl Cli {
    /// The full task description, or `None` when no words were given.
    pub fn task_text(&self) -> Option<String> {
        if self.task.is_empty() {
            None
        } else {
            Some(self.task.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_words_join_into_one_task() {
        let cli = Cli::parse_from(["task-dispatch", "fix", "the", "login", "page"]);
        assert_eq!(cli.task_text().unwrap(), "fix the login page");
    }

    #[test]
    fn test_missing_task_is_none() {
        let cli = Cli::parse_from(["task-dispatch"]);
        assert!(cli.task_text().is_none());
    }

    #[test]
    fn test_output_format_flag() {
        let cli = Cli::parse_from(["task-dispatch", "--output", "json", "audit", "security"]);
        assert!(matches!(cli.output, OutputFormat::Json));
    }
}
