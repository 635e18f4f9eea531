//! Snapshot store: load, save (atomic).

use super::types::Snapshot;
use crate::tripwire::hasher::is_valid_digest;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load the stored snapshot. A missing file is an empty snapshot (first run).
///
/// A file that exists but does not parse as a `path → digest` object is an
/// error; there is no partial recovery.
pub fn load_snapshot(store_path: &Path) -> Result<Snapshot, String> {
    let content = match std::fs::read_to_string(store_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No store at {}, starting empty", store_path.display());
            return Ok(Snapshot::new());
        }
        Err(e) => return Err(format!("cannot read {}: {}", store_path.display(), e)),
    };
    let snapshot: Snapshot = serde_json::from_str(&content)
        .map_err(|e| format!("invalid store file {}: {}", store_path.display(), e))?;

    if let Some((path, digest)) = snapshot.iter().find(|(_, d)| !is_valid_digest(d)) {
        return Err(format!(
            "invalid store file {}: bad digest {:?} for {}",
            store_path.display(),
            digest,
            path
        ));
    }

    info!("Loaded {} entries from {}", snapshot.len(), store_path.display());
    Ok(snapshot)
}

/// Serialize a snapshot to the store's on-disk form (4-space indented JSON).
pub fn to_store_json(snapshot: &Snapshot) -> Result<String, String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    snapshot
        .serialize(&mut ser)
        .map_err(|e| format!("serialize error: {}", e))?;
    String::from_utf8(buf).map_err(|e| format!("serialize error: {}", e))
}

/// Save a snapshot atomically (write to temp, then rename), replacing the
/// previous store in full.
pub fn save_snapshot(snapshot: &Snapshot, store_path: &Path) -> Result<(), String> {
    if let Some(parent) = store_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("cannot create dir {}: {}", parent.display(), e))?;
        }
    }

    let json = to_store_json(snapshot)?;

    let tmp_path = tmp_path_for(store_path);
    std::fs::write(&tmp_path, &json)
        .map_err(|e| format!("cannot write {}: {}", tmp_path.display(), e))?;
    std::fs::rename(&tmp_path, store_path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp_path);
        format!(
            "cannot rename {} → {}: {}",
            tmp_path.display(),
            store_path.display(),
            e
        )
    })?;

    info!("Saved {} entries to {}", snapshot.len(), store_path.display());
    Ok(())
}

fn tmp_path_for(store_path: &Path) -> PathBuf {
    let mut name = store_path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
