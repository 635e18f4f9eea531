//! Append-only plain-text audit log of verification results.
//!
//! Each verify appends one block:
//!
//! ```text
//!
//! --- Scan at 2026-01-01 12:00:00 ---
//! [MODIFIED] /srv/app/config.yaml
//! [DELETED]  /srv/app/old.txt
//! [NEW]      /srv/app/new.txt
//! ```
//!
//! The file is never truncated, rotated, or read back.

use crate::core::types::DiffResult;
use std::io::Write;
use std::path::Path;
use tracing::debug;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time in the log header format.
pub fn now_local() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Render one log block for `diff` stamped with `timestamp`.
pub fn format_record(diff: &DiffResult, timestamp: &str) -> String {
    let mut block = format!("\n--- Scan at {} ---\n", timestamp);
    for path in &diff.modified {
        block.push_str(&format!("[MODIFIED] {}\n", path));
    }
    for path in &diff.deleted {
        block.push_str(&format!("[DELETED]  {}\n", path));
    }
    for path in &diff.new {
        block.push_str(&format!("[NEW]      {}\n", path));
    }
    block
}

/// Append a block for `diff` to the log at `log_path`, creating it if absent.
pub fn append_record(log_path: &Path, diff: &DiffResult) -> Result<(), String> {
    append_record_at(log_path, diff, &now_local())
}

/// Append with an explicit timestamp.
pub fn append_record_at(log_path: &Path, diff: &DiffResult, timestamp: &str) -> Result<(), String> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("cannot create log dir {}: {}", parent.display(), e))?;
        }
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|e| format!("cannot open audit log {}: {}", log_path.display(), e))?;

    file.write_all(format_record(diff, timestamp).as_bytes())
        .map_err(|e| format!("write error {}: {}", log_path.display(), e))?;

    debug!("Appended {} entries to {}", diff.total(), log_path.display());
    Ok(())
}
