//! Snapshot comparison: modified, deleted, and new paths.

use crate::core::types::{DiffResult, Snapshot};

/// Compare a stored snapshot to a fresh one.
///
/// Pure map comparison with no rename detection: content moved from one
/// path to another shows up as one deleted and one new entry. Each output
/// list is sorted.
pub fn diff_snapshots(stored: &Snapshot, fresh: &Snapshot) -> DiffResult {
    let mut result = DiffResult::default();

    for (path, old_digest) in stored.iter() {
        match fresh.get(path) {
            None => result.deleted.push(path.to_string()),
            Some(new_digest) if new_digest != old_digest => {
                result.modified.push(path.to_string());
            }
            Some(_) => {}
        }
    }

    for path in fresh.paths() {
        if !stored.contains(path) {
            result.new.push(path.to_string());
        }
    }

    result.modified.sort();
    result.deleted.sort();
    result.new.sort();
    result
}
