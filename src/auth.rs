//! Invocation of the external authentication tool.
//!
//! The tool (an ADFS/SSO login flow, `aws-adfs` by default) is a black box:
//! given a home directory it populates `{home}/.aws/credentials` and
//! `{home}/.aws/config`. This module locates the executable, drives the
//! login, and reads back which role the flow activated.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::error::{Result, RolecacheError};
use crate::home;

/// Key in `{home}/.aws/config` naming the active role ARN.
const ROLE_ARN_KEY: &str = "adfs_config.role_arn";

/// Result of a successful fresh authentication.
#[derive(Debug)]
pub struct AuthOutcome {
    /// Path of the credentials file the tool wrote.
    pub credentials_file: PathBuf,
    /// Role identifier read from the companion config file, when present.
    pub role_identifier: Option<String>,
}

/// Look for the tool executable in an explicit, ordered list of candidate
/// directories. Returns the first hit, or `None` when no candidate holds it
/// (the caller then falls back to `$PATH`).
pub fn locate_tool(command: &str, candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|dir| dir.join(command))
        .find(|path| path.is_file())
}

/// Resolve the executable to invoke: a search-path hit if any, otherwise the
/// bare command name resolved through `$PATH` at spawn time.
fn resolve_tool(config: &Config) -> PathBuf {
    let command = config.tool_command();
    locate_tool(&command, &config.tool_search_paths())
        .unwrap_or_else(|| PathBuf::from(command))
}

/// Run the external authentication flow and read back what it produced.
///
/// On success the tool has written `{home}/.aws/credentials`; the role
/// identifier comes from the `adfs_config.role_arn` line of
/// `{home}/.aws/config`. If `{home}/.aws` does not exist after the flow, the
/// home directory pointer is deleted and the error surfaces - the run cannot
/// continue.
pub fn authenticate_fresh(home_dir: &Path, pointer_path: &Path, config: &Config) -> Result<AuthOutcome> {
    let tool = resolve_tool(config);

    if config.tool_reset() {
        // A failed reset is not fatal; the login below gives the real verdict.
        match Command::new(&tool).arg("reset").status() {
            Ok(status) if !status.success() => {
                eprintln!("Warning: '{} reset' exited with {}", tool.display(), status);
            }
            Ok(_) => {}
            Err(e) => return Err(tool_spawn_error(&tool, e)),
        }
    }

    let mut login = Command::new(&tool);
    login.arg("login");
    if let Some(host) = config.tool_host() {
        login.arg(format!("--adfs-host={}", host));
    }
    login.arg("--no-sspi");
    if let Some(authfile) = config.tool_authfile() {
        login.arg(format!("--authfile={}", authfile));
    }

    let status = login.status().map_err(|e| tool_spawn_error(&tool, e))?;
    if !status.success() {
        return Err(RolecacheError::config(format!(
            "authentication tool '{}' exited with {}",
            tool.display(),
            status
        )));
    }

    home::verify_aws_folder(pointer_path, home_dir)?;

    let credentials_file = home_dir.join(".aws").join("credentials");
    let aws_config_file = home_dir.join(".aws").join("config");

    let config_text = std::fs::read_to_string(&aws_config_file).map_err(|e| {
        RolecacheError::config(format!(
            "cannot read {}: {}",
            aws_config_file.display(),
            e
        ))
    })?;

    Ok(AuthOutcome {
        credentials_file,
        role_identifier: role_from_config_text(&config_text),
    })
}

/// Extract the active role identifier from `.aws/config` text: the segment
/// after the last `/` on the first line starting with `adfs_config.role_arn`.
pub fn role_from_config_text(text: &str) -> Option<String> {
    text.lines()
        .find(|line| line.starts_with(ROLE_ARN_KEY))
        .and_then(|line| line.rsplit('/').next())
        .map(|role| role.trim().to_string())
        .filter(|role| !role.is_empty())
}

fn tool_spawn_error(tool: &Path, e: std::io::Error) -> RolecacheError {
    if e.kind() == std::io::ErrorKind::NotFound {
        RolecacheError::config(format!(
            "authentication tool '{}' not found. Install it, or add search-path \
             entries under the tool block in rolecache.kdl.",
            tool.display()
        ))
    } else {
        RolecacheError::config(format!("cannot run '{}': {}", tool.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_role_from_config_text() {
        let text = "\
[profile adfs]
region = eu-central-1
adfs_config.role_arn = arn:aws:iam::123456789012:role/esol-ap1234-test-operator
adfs_config.ssl_verification = True
";
        assert_eq!(
            role_from_config_text(text).as_deref(),
            Some("esol-ap1234-test-operator")
        );

        assert_eq!(role_from_config_text("region = eu-central-1\n"), None);
        assert_eq!(role_from_config_text("adfs_config.role_arn = /\n"), None);
    }

    #[test]
    fn test_locate_tool_prefers_earlier_candidates() {
        let base = std::env::temp_dir().join(format!("rolecache_tool_{}", std::process::id()));
        let first = base.join("first");
        let second = base.join("second");
        fs::create_dir_all(&first).unwrap();
        fs::create_dir_all(&second).unwrap();
        fs::write(second.join("aws-adfs"), "").unwrap();

        // Only the second candidate has the binary
        let found = locate_tool("aws-adfs", &[first.clone(), second.clone()]);
        assert_eq!(found, Some(second.join("aws-adfs")));

        // Present in both: the first wins
        fs::write(first.join("aws-adfs"), "").unwrap();
        let found = locate_tool("aws-adfs", &[first.clone(), second.clone()]);
        assert_eq!(found, Some(first.join("aws-adfs")));

        // No candidates at all
        assert_eq!(locate_tool("aws-adfs", &[]), None);

        fs::remove_dir_all(&base).unwrap();
    }
}
