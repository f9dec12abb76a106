//! List command handler - show cached snapshots and their ages.

use chrono::Local;
use chrono_humanize::HumanTime;

use crate::config::Config;
use crate::error::Result;
use crate::manager::compile_project_pattern;
use crate::snapshot;

/// Handle the list command: enumerate cached snapshots for a role prefix
/// with humanized ages and an expiry marker.
pub fn handle_list(config: &Config, role: Option<String>) -> Result<()> {
    let directory = config.snapshots_path();
    let pattern = snapshot::snapshot_pattern();
    let project = compile_project_pattern(config)?;
    let now = Local::now().naive_local();

    let prefix = role.or_else(|| config.default_role()).unwrap_or_default();
    let candidates = snapshot::list_candidates(&directory, &prefix)?;

    if candidates.is_empty() {
        if prefix.is_empty() {
            println!("No cached credential snapshots in {}.", directory.display());
        } else {
            println!(
                "No cached credential snapshots for '{}' in {}.",
                prefix,
                directory.display()
            );
        }
        return Ok(());
    }

    let ttl = i64::try_from(config.ttl())
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .unwrap_or(chrono::Duration::MAX);

    println!("Cached credential snapshots in {}:", directory.display());
    for filename in &candidates {
        let fragment = snapshot::role_fragment(&pattern, filename);
        let label = snapshot::role_label(&project, &fragment);

        match snapshot::parse_snapshot_time(&pattern, filename) {
            Some(Ok(created_at)) => {
                let age = HumanTime::from(created_at - now);
                let expired_marker = match created_at.checked_add_signed(ttl) {
                    Some(deadline) if deadline < now => " (expired)",
                    _ => "",
                };
                println!("  {} | {} | {}{}", filename, label, age, expired_marker);
            }
            Some(Err(_)) => {
                println!("  {} | {} | (unreadable timestamp)", filename, label);
            }
            None => {
                println!("  {} | {}", filename, label);
            }
        }
    }

    Ok(())
}
