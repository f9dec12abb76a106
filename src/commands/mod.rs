//! Command handlers for the rolecache CLI.

mod clean;
mod config_cmd;
mod list;
mod login;

pub use clean::handle_clean;
pub use config_cmd::handle_config;
pub use list::handle_list;
pub use login::handle_login;
