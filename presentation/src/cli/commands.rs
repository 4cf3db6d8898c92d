//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for reconciled bills
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full report with actions, votes, and rosters
    Full,
    /// One line per bill
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for statehouse_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for statehouse
#[derive(Parser, Debug)]
#[command(name = "statehouse")]
#[command(author, version, about = "Reconcile legislative bill actions with their recorded votes")]
#[command(long_about = r#"
Statehouse turns the action history of a bill into typed actions and
attaches the recorded vote, if any, to each action.

For every action row it:
1. Classifies the actor and the action type
2. Fetches and parses the linked vote document (HTML tables or a text tally)
3. Falls back to the row's own yes/no counts and wording when the document
   is missing or does not say whether the motion carried

Input files are JSON, one bill object or an array of them.

Configuration files are loaded from (in priority order):
1. --config <path>         Explicit config file
2. ./statehouse.toml       Project-level config
3. ~/.config/statehouse/config.toml   Global config

Example:
  statehouse bills/HB0002.json
  statehouse -o full --documents fixtures/votes bills/*.json
  statehouse -o json --base-url http://laws.leg.mt.gov/laws09/ bills.json
"#)]
pub struct Cli {
    /// Bill input files (JSON)
    #[arg(value_name = "FILE", required_unless_present = "show_config")]
    pub inputs: Vec<PathBuf>,

    /// Output format [default: summary, or `output.format` from config]
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Base URL for relative vote links when a bill has no laws-server source
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Read vote documents from this directory instead of the network
    #[arg(long, value_name = "DIR")]
    pub documents: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
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

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
