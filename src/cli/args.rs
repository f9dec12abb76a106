//! CLI argument parsing structures.

use clap::{Args, Parser};
use std::path::PathBuf;

use super::commands::Commands;

/// Main CLI structure for rolecache.
#[derive(Parser, Debug)]
#[command(name = "rolecache")]
#[command(about = "Cache AWS temporary role credentials as local snapshots", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global configuration arguments available to all commands.
#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// Directory holding the credential snapshot files
    #[arg(long, global = true)]
    pub snapshots_path: Option<PathBuf>,

    /// Snapshot time-to-live in seconds
    #[arg(long, global = true)]
    pub ttl: Option<u64>,
}
