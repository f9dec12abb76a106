//! The home directory pointer file.
//!
//! The external auth tool writes credentials under `{home}/.aws/`. Which
//! directory counts as "home" is chosen by the user once and cached in a
//! one-line text file; every later run reads the pointer instead of asking
//! again. If the cached path stops containing `.aws`, the pointer is deleted
//! and the error surfaces - it is not regenerated within the same run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::expand_tilde;
use crate::error::{Result, RolecacheError};
use crate::utils::prompt_line;

/// Load the cached home directory, prompting the user to select one when no
/// pointer file exists yet. The platform home directory is offered as the
/// default answer.
pub fn load_or_select(pointer_path: &Path) -> Result<PathBuf> {
    if pointer_path.exists() {
        let contents = fs::read_to_string(pointer_path)?;
        let line = contents.lines().next().unwrap_or("").trim();
        if line.is_empty() {
            return Err(RolecacheError::config(format!(
                "home directory pointer {} is empty",
                pointer_path.display()
            )));
        }
        return Ok(PathBuf::from(line));
    }

    let default_home = dirs::home_dir().map(|h| h.to_string_lossy().to_string());
    println!(
        "Select the home directory that holds (or will hold) the '.aws' folder \
         (e.g. Windows: C:\\Users\\Name ; Linux/macOS: /home/name)."
    );
    let answer = prompt_line("Home directory", default_home.as_deref())?;
    if answer.is_empty() {
        return Err(RolecacheError::config(
            "no home directory selected and none could be detected",
        ));
    }

    let home = expand_tilde(&answer);
    if let Some(parent) = pointer_path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(pointer_path, format!("{}\n", home.display()))?;
    Ok(home)
}

/// Verify `{home}/.aws` exists. On failure the pointer file is deleted and a
/// fatal error is returned; the run cannot recover because the auth tool has
/// already written (or failed to write) its files elsewhere.
pub fn verify_aws_folder(pointer_path: &Path, home: &Path) -> Result<()> {
    if home.join(".aws").is_dir() {
        return Ok(());
    }

    if pointer_path.exists() {
        fs::remove_file(pointer_path)?;
        println!(
            "Removed stale home directory pointer {}.",
            pointer_path.display()
        );
    }
    Err(RolecacheError::HomeDirInvalid(home.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rolecache_home_{}_{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_existing_pointer() {
        let dir = scratch_dir("load");
        let pointer = dir.join("HomeDir.txt");
        fs::write(&pointer, "/home/someone\n").unwrap();

        let home = load_or_select(&pointer).unwrap();
        assert_eq!(home, PathBuf::from("/home/someone"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_pointer_is_an_error() {
        let dir = scratch_dir("empty");
        let pointer = dir.join("HomeDir.txt");
        fs::write(&pointer, "\n").unwrap();

        assert!(matches!(
            load_or_select(&pointer),
            Err(RolecacheError::Config(_))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_verify_aws_folder_deletes_pointer_on_miss() {
        let dir = scratch_dir("verify");
        let pointer = dir.join("HomeDir.txt");
        let home = dir.join("fakehome");
        fs::create_dir_all(&home).unwrap();
        fs::write(&pointer, format!("{}\n", home.display())).unwrap();

        // No .aws folder yet: pointer must be removed and the error surfaced
        assert!(matches!(
            verify_aws_folder(&pointer, &home),
            Err(RolecacheError::HomeDirInvalid(_))
        ));
        assert!(!pointer.exists());

        // With .aws present the check passes
        fs::create_dir_all(home.join(".aws")).unwrap();
        assert!(verify_aws_folder(&pointer, &home).is_ok());

        fs::remove_dir_all(&dir).unwrap();
    }
}
