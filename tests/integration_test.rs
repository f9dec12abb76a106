//! Integration tests for the rolecache library.
//!
//! These tests verify the public API works correctly.

use std::path::PathBuf;

use rolecache::config::Config;
use rolecache::snapshot::{snapshot_path, snapshot_pattern};

#[test]
fn test_config_load_with_defaults() {
    // Load config - will use defaults if no config file exists
    let config = Config::load().unwrap();

    // Check default values are sensible
    assert!(config.ttl() > 0);
    assert!(!config.tool_command().is_empty());
    assert!(!config.project_pattern().is_empty());
}

#[test]
fn test_snapshot_pattern_matches_expected_shape() {
    let pattern = snapshot_pattern();

    assert!(pattern.is_match("esol-ap1234-test_202401010900.txt"));
    assert!(pattern.is_match("roleB_202401011000.ini"));
    assert!(!pattern.is_match("HomeDir.txt"));
    assert!(!pattern.is_match("rolecache.kdl"));
}

#[test]
fn test_snapshot_path() {
    let dir = PathBuf::from("/tmp/snapshots");
    let path = snapshot_path(&dir, "roleA_202401010900.txt");
    assert_eq!(path, PathBuf::from("/tmp/snapshots/roleA_202401010900.txt"));
}

#[test]
fn test_default_config_path_mentions_rolecache() {
    let path = Config::default_config_path();
    assert!(path.to_string_lossy().contains("rolecache"));
}
