//! Clean command handler - the expiry sweep on demand.

use chrono::Local;

use crate::config::Config;
use crate::error::Result;
use crate::snapshot;

/// Handle the clean command: delete expired snapshots (or all of them with
/// `--all`). `--dry-run` prints what would be removed without deleting.
pub fn handle_clean(config: &Config, all: bool, dry_run: bool) -> Result<()> {
    let directory = config.snapshots_path();
    let pattern = snapshot::snapshot_pattern();
    let now = Local::now().naive_local();

    let ttl = if all { 0 } else { config.ttl() };
    let report = snapshot::purge_expired(&directory, &pattern, ttl, now, dry_run)?;

    if report.removed.is_empty() && report.skipped.is_empty() {
        println!("Nothing to clean in {}.", directory.display());
        return Ok(());
    }

    if dry_run {
        println!("Would remove {} snapshot(s):", report.removed.len());
        for filename in &report.removed {
            println!("  {}", filename);
        }
        println!();
        println!("(dry run - no changes made)");
    } else {
        println!("Removed {} snapshot(s).", report.removed.len());
    }

    if !report.skipped.is_empty() {
        println!(
            "Skipped {} file(s) with unreadable timestamps.",
            report.skipped.len()
        );
    }

    Ok(())
}
