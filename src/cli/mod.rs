//! Command surface: scan, verify, update.

use crate::core::config::AuditConfig;
use crate::core::store;
use crate::core::types::{DiffResult, SkippedFile};
use crate::tripwire::{auditlog, diff, scanner};
use std::path::{Path, PathBuf};
use tracing::info;

/// One operator action per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Build and persist a fresh snapshot
    Scan(PathBuf),

    /// Compare a fresh scan against the store and log the differences
    Verify(PathBuf),

    /// Rebuild and persist the snapshot (same as scan)
    Update(PathBuf),
}

/// Options shared by all actions.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: AuditConfig,

    /// Fail verify when any change is found
    pub tripwire: bool,
}

/// Dispatch an action.
pub fn dispatch(action: Action, opts: &RunOptions) -> Result<(), String> {
    match action {
        Action::Scan(dir) => cmd_scan(&dir, &opts.config),
        Action::Verify(dir) => cmd_verify(&dir, &opts.config, opts.tripwire).map(|_| ()),
        Action::Update(dir) => cmd_update(&dir, &opts.config),
    }
}

fn cmd_scan(dir: &Path, config: &AuditConfig) -> Result<(), String> {
    let count = rebuild_store(dir, config)?;
    println!(
        "[+] Scanned and saved hashes for {} ({} files)",
        dir.display(),
        count
    );
    Ok(())
}

// Same as scan: no comparison, no log entry.
fn cmd_update(dir: &Path, config: &AuditConfig) -> Result<(), String> {
    let count = rebuild_store(dir, config)?;
    println!(
        "[+] Hash database updated for {} ({} files)",
        dir.display(),
        count
    );
    Ok(())
}

fn rebuild_store(dir: &Path, config: &AuditConfig) -> Result<usize, String> {
    let outcome = scanner::scan_directory(dir)?;
    report_skipped(&outcome.skipped);
    store::save_snapshot(&outcome.snapshot, &config.store_path)?;
    Ok(outcome.snapshot.len())
}

fn cmd_verify(dir: &Path, config: &AuditConfig, tripwire: bool) -> Result<DiffResult, String> {
    let stored = store::load_snapshot(&config.store_path)?;
    let outcome = scanner::scan_directory(dir)?;
    let result = diff::diff_snapshots(&stored, &outcome.snapshot);
    info!("Verify {}: {}", dir.display(), result);

    auditlog::append_record(&config.log_path, &result)?;

    report_skipped(&outcome.skipped);
    print_report(&result, &config.log_path);

    if tripwire && !result.is_clean() {
        return Err(format!("{} change(s) detected", result.total()));
    }
    Ok(result)
}

fn report_skipped(skipped: &[SkippedFile]) {
    if !skipped.is_empty() {
        println!("[!] Skipped {} unreadable file(s)", skipped.len());
    }
}

/// Display a verification result to stdout.
fn print_report(result: &DiffResult, log_path: &Path) {
    println!("[✓] Verification complete: {}.", result);
    print_section("Modified files", &result.modified);
    print_section("Deleted files", &result.deleted);
    print_section("New files", &result.new);
    println!("Check {} for details.", log_path.display());
}

fn print_section(title: &str, paths: &[String]) {
    println!("{}: {}", title, paths.len());
    for path in paths {
        println!("  {}", path);
    }
}
