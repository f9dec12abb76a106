use clap::Parser;

use rolecache::cli::{Cli, Commands};
use rolecache::commands::{handle_clean, handle_config, handle_list, handle_login};
use rolecache::config::Config;
use rolecache::error::Result;

fn main() {
    // The only place the process terminates on error: library code returns
    // Results all the way up.
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Load config from file, then apply command-line overrides
    let mut config = Config::load()?;
    if let Some(path) = &cli.config.snapshots_path {
        config
            .set_default("snapshots_path", &path.to_string_lossy())
            .map_err(rolecache::RolecacheError::Config)?;
    }
    if let Some(ttl) = cli.config.ttl {
        config
            .set_default("ttl", &ttl.to_string())
            .map_err(rolecache::RolecacheError::Config)?;
    }

    match cli.command {
        // No subcommand: behave like a plain `login`, the single-shot flow
        // this tool exists for.
        None => handle_login(&config, None, false, false),

        Some(Commands::Login { role, fresh, export }) => {
            handle_login(&config, role, fresh, export)
        }

        Some(Commands::List { role }) => handle_list(&config, role),

        Some(Commands::Clean { all, dry_run }) => handle_clean(&config, all, dry_run),

        Some(Commands::Config { command }) => handle_config(config, command),

        Some(Commands::Version) => {
            println!("rolecache {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
