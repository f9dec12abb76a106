//! Unified error type for rolecache.
//!
//! All public APIs return `Result<T, RolecacheError>`. The error type provides
//! specific variants for the failure categories the tool actually hits while
//! remaining easy to construct from string messages. The binary entry point in
//! `main.rs` is the only place that turns an error into a process exit.

use std::fmt;
use std::path::PathBuf;

/// The unified error type for all rolecache operations.
#[derive(Debug)]
pub enum RolecacheError {
    /// Filesystem or I/O operation failed.
    Io(std::io::Error),

    /// Config file missing/invalid, or an expected external piece
    /// (auth tool, credentials file) is absent.
    Config(String),

    /// Malformed credentials file, config line, or snapshot timestamp.
    Parse(String),

    /// Fewer than four credential fields were recovered, or a field is empty.
    IncompleteCredentials { missing: Vec<String> },

    /// The cached home directory no longer contains a `.aws` folder.
    /// The pointer file has already been deleted when this is raised.
    HomeDirInvalid(PathBuf),

    /// The user aborted an interactive prompt (EOF on stdin).
    Cancelled,

    /// Any other error.
    Other(String),
}

impl fmt::Display for RolecacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RolecacheError::Io(e) => write!(f, "{}", e),
            RolecacheError::Config(msg) => write!(f, "config error: {}", msg),
            RolecacheError::Parse(msg) => write!(f, "parse error: {}", msg),
            RolecacheError::IncompleteCredentials { missing } => write!(
                f,
                "incomplete credentials: missing or empty field(s): {}",
                missing.join(", ")
            ),
            RolecacheError::HomeDirInvalid(path) => write!(
                f,
                "no '.aws' folder under {}; the home directory pointer has been \
                 removed, re-run to select the home directory again",
                path.display()
            ),
            RolecacheError::Cancelled => write!(f, "cancelled"),
            RolecacheError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for RolecacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RolecacheError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RolecacheError {
    fn from(e: std::io::Error) -> Self {
        RolecacheError::Io(e)
    }
}

// Allow easy conversion from string-based errors (the most common pattern).
impl From<String> for RolecacheError {
    fn from(s: String) -> Self {
        RolecacheError::Other(s)
    }
}

impl From<&str> for RolecacheError {
    fn from(s: &str) -> Self {
        RolecacheError::Other(s.to_string())
    }
}

impl RolecacheError {
    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        RolecacheError::Config(message.into())
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        RolecacheError::Parse(message.into())
    }

    /// Create an incomplete-credentials error from the missing field names.
    pub fn incomplete<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RolecacheError::IncompleteCredentials {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }
}

/// Convenience type alias for Results using RolecacheError.
pub type Result<T> = std::result::Result<T, RolecacheError>;
