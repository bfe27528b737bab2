use crate::types::{CategoryArg, DirectionArg, LogLevel, OutputFormat, SortKeyArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rattle")]
#[command(about = "Filter, sort and page through a sales pipeline", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory holding config.toml [default: $RATTLE_PATH or the XDG data dir]
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Deal collection (JSON array); overrides data.deals_path
    #[arg(long, global = true)]
    pub deals: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List, inspect and count deals
    Deals {
        #[command(subcommand)]
        command: DealsCommand,
    },

    /// Distinct deal owners
    Owners,

    /// Deal count per pipeline stage
    Pipeline,

    /// Owners ranked by closed-won value
    Leaderboard {
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// Show or create config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum DealsCommand {
    /// One page of the filtered, sorted deal list
    List {
        /// Case-insensitive match on deal name or company
        #[arg(long)]
        search: Option<String>,

        /// Exact owner name
        #[arg(long)]
        owner: Option<String>,

        #[arg(long, default_value = "all")]
        category: CategoryArg,

        #[arg(long)]
        sort: Option<SortKeyArg>,

        /// Sort direction [default: desc]
        #[arg(long, requires = "sort")]
        direction: Option<DirectionArg>,

        /// 1-indexed page, clamped to the available range
        #[arg(long, default_value = "1")]
        page: usize,

        /// Overrides list.page_size from config
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Full details of one deal
    Show { id: String },

    /// Deal count per category tab
    Counts,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a default config.toml
    Init {
        /// Overwrite an existing config.toml
        #[arg(long)]
        force: bool,
    },
}
