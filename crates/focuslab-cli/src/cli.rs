//! CLI command definitions and argument parsing.

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Focuslab CLI - Analyze 14-day focus experiments.
#[derive(Debug, Parser)]
#[command(name = "focuslab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FOCUSLAB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (decision or ids only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze an experiment from an exported data file
    Analyze(AnalyzeArgs),

    /// Generate a sample baseline week
    Sample(SampleArgs),

    /// List the built-in experiment playbooks
    Playbooks(PlaybooksArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Exported data file (JSON)
    #[arg(short, long)]
    pub data: PathBuf,

    /// Experiment ID (defaults to the current or most recent experiment)
    #[arg(short, long)]
    pub experiment: Option<String>,

    /// Bootstrap iterations (overrides config)
    #[arg(short, long)]
    pub iterations: Option<usize>,
}

/// Arguments for the sample command.
#[derive(Debug, Parser)]
pub struct SampleArgs {
    /// Day after the generated week (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub today: Option<NaiveDate>,
}

/// Arguments for the playbooks command.
#[derive(Debug, Parser)]
pub struct PlaybooksArgs {
    /// Show a single playbook
    #[arg(long)]
    pub id: Option<String>,
}

/// Arguments for config management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file location
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
