//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rarity - rank NFT collection items by trait rarity.
#[derive(Debug, Parser)]
#[command(name = "rarity")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "RARITY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank a collection and write metadata, rankings and statistics
    Rank(RankArgs),

    /// Print trait statistics for a collection
    Stats(StatsArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the rank command.
#[derive(Debug, Default, Parser)]
pub struct RankArgs {
    /// Metadata JSON file (prompted for when omitted)
    pub input: Option<PathBuf>,

    /// Directory for the rankings and statistics reports
    #[arg(short, long)]
    pub reports_dir: Option<PathBuf>,

    /// Directory for the updated metadata (defaults to the input's directory)
    #[arg(short, long)]
    pub metadata_dir: Option<PathBuf>,

    /// Item link pattern, must contain {id}
    #[arg(short, long)]
    pub link_template: Option<String>,

    /// Skip printing trait statistics to the terminal
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Metadata JSON file (prompted for when omitted)
    pub input: Option<PathBuf>,

    /// Maximum number of traits to show
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: StatsFormat,
}

/// Statistics output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StatsFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
