//! Command and subcommand definitions.

use clap::Subcommand;
use std::path::PathBuf;

/// Top-level commands available in rolecache.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obtain credentials: reuse a cached snapshot or run the auth flow
    Login {
        /// Role prefix for candidate snapshots (overrides default_role)
        role: Option<String>,

        /// Skip the cached-snapshot menu and authenticate directly
        #[arg(short, long)]
        fresh: bool,

        /// Print `export KEY=value` lines for shell eval
        #[arg(short, long)]
        export: bool,
    },
    /// List cached credential snapshots with their ages
    List {
        /// Role prefix to filter by (overrides default_role)
        role: Option<String>,
    },
    /// Delete expired credential snapshots
    Clean {
        /// Delete all snapshots regardless of age
        #[arg(short, long)]
        all: bool,

        /// Show what would be deleted without actually deleting
        #[arg(long)]
        dry_run: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print version information
    Version,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new config file
    Init {
        /// Path where to create the config file (default: ~/.config/rolecache/rolecache.kdl)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite existing config file if it exists
        #[arg(long)]
        overwrite: bool,
    },
    /// Show the current configuration
    List,
    /// Get a specific configuration value
    Get {
        /// Setting key (e.g., "ttl", "snapshots_path", "default_role")
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Setting key
        key: String,
        /// New value
        value: String,
    },
}
