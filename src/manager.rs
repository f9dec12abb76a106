//! The credential lifecycle orchestration.
//!
//! One pass through [`get_or_refresh_credentials`] realizes the whole flow:
//! purge expired snapshots, offer the remaining ones for reuse, fall back to
//! the external authentication flow on a miss, persist the fresh snapshot,
//! and export the resulting credentials to the process environment. There
//! are no retries and no concurrency; every state is terminal after one
//! pass.

use std::path::Path;

use chrono::Local;
use regex::Regex;

use crate::auth;
use crate::config::Config;
use crate::credentials::CredentialSet;
use crate::error::{Result, RolecacheError};
use crate::home;
use crate::snapshot;
use crate::utils::{prompt_selection, Selection};

/// Where the credentials of a session came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Reused from an existing snapshot chosen by the user.
    CacheHit,
    /// Obtained through the external authentication flow.
    Refreshed,
}

/// The outcome of one orchestration pass. Callers tag their subsequent AWS
/// operations with `role_label`; the credentials are also available directly
/// so library users need not read them back out of the environment.
#[derive(Debug)]
pub struct SessionCredentials {
    pub credentials: CredentialSet,
    pub role_label: String,
    /// Snapshot filename that was reused or created.
    pub snapshot: String,
    pub source: CredentialSource,
}

/// Candidates offered in the interactive menu: the prefix listing narrowed
/// to filenames with a valid snapshot shape. An empty prefix lists the whole
/// directory, which may hold non-snapshot files (the home directory pointer
/// lives there by default); offering those would turn a menu choice into a
/// fatal parse error.
pub fn menu_candidates(directory: &Path, prefix: &str, pattern: &Regex) -> Result<Vec<String>> {
    Ok(snapshot::list_candidates(directory, prefix)?
        .into_iter()
        .filter(|filename| pattern.is_match(filename))
        .collect())
}

/// Present the candidate snapshots as a numbered menu and parse the chosen
/// one. Declining (0, out-of-range, or non-numeric input) returns `Ok(None)`
/// so the caller falls through to fresh authentication; a snapshot that then
/// fails to parse is a fatal error, not a fallthrough.
pub fn select_and_parse(
    directory: &Path,
    candidates: &[String],
) -> Result<Option<(String, CredentialSet)>> {
    match prompt_selection("Available credential snapshots:", candidates)? {
        Selection::Declined => Ok(None),
        Selection::Index(index) => {
            let filename = &candidates[index];
            let set = CredentialSet::from_ini_file(&snapshot::snapshot_path(directory, filename))?;
            Ok(Some((filename.clone(), set)))
        }
    }
}

/// Run the full lifecycle pass described in the module docs.
///
/// `role` overrides the configured default prefix for candidate listing;
/// `fresh` skips the cached-candidate menu entirely.
pub fn get_or_refresh_credentials(
    config: &Config,
    role: Option<&str>,
    fresh: bool,
) -> Result<SessionCredentials> {
    let directory = config.snapshots_path();
    let pattern = snapshot::snapshot_pattern();
    let project = compile_project_pattern(config)?;
    let now = Local::now().naive_local();

    // 1. Expiry sweep
    snapshot::purge_expired(&directory, &pattern, config.ttl(), now, false)?;

    // 2. + 3. Candidate listing and interactive reuse
    let prefix = role
        .map(str::to_string)
        .or_else(|| config.default_role())
        .unwrap_or_default();
    if !fresh {
        let candidates = menu_candidates(&directory, &prefix, &pattern)?;
        if !candidates.is_empty()
            && let Some((filename, credentials)) = select_and_parse(&directory, &candidates)?
        {
            let fragment = snapshot::role_fragment(&pattern, &filename);
            let role_label = snapshot::role_label(&project, &fragment);
            credentials.export_to_environment(config.region().as_deref())?;
            return Ok(SessionCredentials {
                credentials,
                role_label,
                snapshot: filename,
                source: CredentialSource::CacheHit,
            });
        }
    }

    // 4. Fresh authentication
    let pointer = config.home_pointer_path();
    let home_dir = home::load_or_select(&pointer)?;
    let outcome = auth::authenticate_fresh(&home_dir, &pointer, config)?;
    let role_identifier = outcome.role_identifier.ok_or_else(|| {
        RolecacheError::config(
            "could not determine the active role from .aws/config; \
             re-run the authentication flow",
        )
    })?;

    // 5. Persist the snapshot
    let (filename, credentials) =
        snapshot::persist_snapshot(&outcome.credentials_file, &role_identifier, &directory, now)?;
    println!("Saved credential snapshot '{}'.", filename);

    // 6. Environment export
    credentials.export_to_environment(config.region().as_deref())?;

    Ok(SessionCredentials {
        role_label: snapshot::role_label(&project, &role_identifier),
        credentials,
        snapshot: filename,
        source: CredentialSource::Refreshed,
    })
}

/// Compile the configured project-code pattern.
pub fn compile_project_pattern(config: &Config) -> Result<Regex> {
    let pattern = config.project_pattern();
    Regex::new(&pattern)
        .map_err(|e| RolecacheError::config(format!("invalid project_pattern '{}': {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_menu_candidates_excludes_non_snapshot_files() {
        let dir = std::env::temp_dir().join(format!("rolecache_menu_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        fs::write(dir.join("roleA_202401010900.txt"), "x").unwrap();
        fs::write(dir.join("HomeDir.txt"), "/home/someone\n").unwrap();
        fs::write(dir.join("notes.md"), "x").unwrap();

        let pattern = snapshot::snapshot_pattern();

        // Empty prefix lists everything, but only real snapshots are offered
        let offered = menu_candidates(&dir, "", &pattern).unwrap();
        assert_eq!(offered, vec!["roleA_202401010900.txt"]);

        // The raw prefix listing still sees the pointer file
        let raw = snapshot::list_candidates(&dir, "HomeDir").unwrap();
        assert_eq!(raw, vec!["HomeDir.txt"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_compile_project_pattern_rejects_bad_regex() {
        let mut config = Config {
            defaults: None,
            tool: None,
        };
        assert!(compile_project_pattern(&config).is_ok());

        config.set_default("project_pattern", "(").unwrap();
        assert!(matches!(
            compile_project_pattern(&config),
            Err(RolecacheError::Config(_))
        ));
    }
}
