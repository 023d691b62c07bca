//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nextdate_core::TracingOutputFormat;

/// nextdate - next occurrence of a recurring task
#[derive(Debug, Parser)]
#[command(name = "nextdate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "NEXTDATE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v', global = true)]
    pub debug: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Log format: pretty, compact or json (overrides the config file)
    #[arg(long, value_name = "FORMAT", env = "NEXTDATE_LOG_FORMAT", global = true)]
    pub log_format: Option<TracingOutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the next occurrence of a rule
    Next {
        /// Reference date (YYYYMMDD), defaults to today
        #[arg(long)]
        now: Option<String>,

        /// Anchor date the task counts from (YYYYMMDD)
        #[arg(long)]
        date: String,

        /// Recurrence rule, e.g. "d 7", "w 1,3", "y"
        #[arg(long, default_value = "")]
        repeat: String,
    },

    /// Parse and validate a rule
    Parse {
        /// Recurrence rule text
        #[arg(default_value = "")]
        rule: String,
    },

    /// Resolve the date a new or edited task should carry
    Resolve {
        /// Task date (YYYYMMDD), empty for today
        #[arg(long, default_value = "")]
        date: String,

        /// Recurrence rule
        #[arg(long, default_value = "")]
        repeat: String,

        /// Current date (YYYYMMDD), defaults to today
        #[arg(long)]
        today: Option<String>,
    },

    /// Decide what marking a task done does
    Done {
        /// Task date (YYYYMMDD)
        #[arg(long)]
        date: String,

        /// Recurrence rule
        #[arg(long, default_value = "")]
        repeat: String,

        /// Current date (YYYYMMDD), defaults to today
        #[arg(long)]
        today: Option<String>,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Show configuration file path
    Path,
}
