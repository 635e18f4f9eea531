//! Recursive directory scan into a [`Snapshot`].

use crate::core::types::{ScanOutcome, SkippedFile, Snapshot};
use crate::tripwire::hasher;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Scan every regular file under `root` and digest it.
///
/// Keys are absolute paths under the canonicalized root. Directory symlinks
/// are not followed; a symlink to a regular file is recorded under the link
/// path. Files that cannot be read land in `skipped` instead of the snapshot.
///
/// Fails only when `root` itself cannot be resolved as a directory.
pub fn scan_directory(root: &Path) -> Result<ScanOutcome, String> {
    let root = canonical_root(root)?;
    info!("Scanning {}", root.display());

    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(&root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_else(|| root.to_string_lossy().into_owned());
                skip(&mut outcome, path, format!("cannot walk: {}", e));
                continue;
            }
        };

        let ft = entry.file_type();
        if ft.is_dir() {
            continue;
        }

        let path = entry.path();
        if ft.is_symlink() {
            match std::fs::metadata(path) {
                Ok(meta) if meta.is_file() => {}
                Ok(_) => {
                    debug!("Not following symlink {}", path.display());
                    continue;
                }
                Err(e) => {
                    let key = path.to_string_lossy().into_owned();
                    skip(&mut outcome, key, format!("dangling symlink: {}", e));
                    continue;
                }
            }
        } else if !ft.is_file() {
            debug!("Ignoring special file {}", path.display());
            continue;
        }

        record(&mut outcome, path);
    }

    info!(
        "Scan complete: {} files digested, {} skipped",
        outcome.snapshot.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}

/// Resolve `root` to an absolute canonical directory path.
pub fn canonical_root(root: &Path) -> Result<PathBuf, String> {
    let canonical = std::fs::canonicalize(root)
        .map_err(|e| format!("cannot resolve {}: {}", root.display(), e))?;
    if !canonical.is_dir() {
        return Err(format!("{} is not a directory", root.display()));
    }
    Ok(canonical)
}

fn record(outcome: &mut ScanOutcome, path: &Path) {
    let key = path.to_string_lossy().into_owned();
    match hasher::hash_file(path) {
        Ok(digest) => {
            debug!("{} {}", digest, key);
            outcome.snapshot.insert(key, digest);
        }
        Err(reason) => skip(outcome, key, reason),
    }
}

fn skip(outcome: &mut ScanOutcome, path: String, reason: String) {
    warn!("Skipping {}: {}", path, reason);
    outcome.skipped.push(SkippedFile { path, reason });
}

/// Convenience wrapper returning only the snapshot.
pub fn snapshot_of(root: &Path) -> Result<Snapshot, String> {
    scan_directory(root).map(|o| o.snapshot)
}
