//! Configuration loading and management.

mod loader;
mod types;

pub(crate) use types::expand_tilde;
pub use types::{Config, Defaults, SearchPath, ToolConfig};
