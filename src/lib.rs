//! rolecache - a CLI tool and library for caching AWS temporary role
//! credentials as local snapshot files.
//!
//! This crate provides functionality to:
//! - Purge credential snapshots older than a configurable TTL
//! - Enumerate remaining snapshots for interactive reuse
//! - Fall back to an external ADFS/SSO authentication tool on a cache miss
//! - Export the resulting credentials as process environment variables
//!
//! # Example
//!
//! ```no_run
//! use rolecache::{get_or_refresh_credentials, Config};
//!
//! fn main() -> rolecache::Result<()> {
//!     let config = Config::load()?;
//!     let session = get_or_refresh_credentials(&config, None, false)?;
//!     println!("Active role: {}", session.role_label);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod home;
pub mod manager;
pub mod snapshot;
pub mod utils;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use credentials::CredentialSet;
pub use error::{Result, RolecacheError};
pub use manager::{get_or_refresh_credentials, CredentialSource, SessionCredentials};
