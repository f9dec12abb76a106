//! Config command handlers - init, list, get, set.

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::error::{Result, RolecacheError};

/// Handle the config subcommands.
pub fn handle_config(config: Config, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Init { path, overwrite } => {
            let config_path = Config::generate_config_file(path, overwrite)?;
            println!("Config file generated at: {}", config_path.display());
        }
        ConfigCommands::List => {
            println!("Current Configuration:");
            println!("  snapshots_path: {}", config.snapshots_path().display());
            println!("  ttl: {}s", config.ttl());
            println!(
                "  default_role: {}",
                config.default_role().unwrap_or_else(|| "(not set)".to_string())
            );
            println!(
                "  region: {}",
                config.region().unwrap_or_else(|| "(not set)".to_string())
            );
            println!("  project_pattern: {}", config.project_pattern());
            println!("  home_pointer: {}", config.home_pointer_path().display());
            println!();
            println!("Auth tool:");
            println!("  command: {}", config.tool_command());
            if let Some(host) = config.tool_host() {
                println!("  host: {}", host);
            }
            if let Some(authfile) = config.tool_authfile() {
                println!("  authfile: {}", authfile);
            }
            println!("  reset: {}", config.tool_reset());
            for path in config.tool_search_paths() {
                println!("  search-path: {}", path.display());
            }
        }
        ConfigCommands::Get { key } => match config.get_default(&key) {
            Ok(value) => println!("{}", value),
            Err(e) => eprintln!("{}", e),
        },
        ConfigCommands::Set { key, value } => {
            let config_path = Config::find_existing_config().ok_or_else(|| {
                RolecacheError::config(
                    "Config file not found. Run 'rolecache config init' first.",
                )
            })?;
            let mut config = config;
            match config.set_default(&key, &value) {
                Ok(()) => {
                    config.save(&config_path)?;
                    println!("Updated {} = {}", key, value);
                }
                Err(e) => eprintln!("{}", e),
            }
        }
    }
    Ok(())
}
