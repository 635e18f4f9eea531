//! Snapshot, diff, and scan result types.
//!
//! A snapshot maps absolute file paths to SHA-256 digests. It serializes as a
//! flat JSON object so the on-disk store stays a plain `path → digest` map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Snapshot
// ============================================================================

/// Point-in-time mapping from absolute file path to hex digest.
///
/// Backed by a `BTreeMap` so serialization order is stable; membership and
/// iteration carry no other ordering meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    entries: BTreeMap<String, String>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a digest for `path`, replacing any previous one.
    pub fn insert(&mut self, path: impl Into<String>, digest: impl Into<String>) {
        self.entries.insert(path.into(), digest.into());
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(path, digest)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (k, v) in iter {
            snapshot.insert(k, v);
        }
        snapshot
    }
}

// ============================================================================
// Scan outcome
// ============================================================================

/// A file the scanner saw but could not digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Result of scanning a directory tree.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Every file that could be digested
    pub snapshot: Snapshot,

    /// Files excluded because reading them failed
    pub skipped: Vec<SkippedFile>,
}

// ============================================================================
// Diff result
// ============================================================================

/// Classification of paths between a stored and a fresh snapshot.
///
/// The three lists are disjoint and sorted. Unchanged paths are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Present in both, digest differs
    pub modified: Vec<String>,

    /// Present only in the stored snapshot
    pub deleted: Vec<String>,

    /// Present only in the fresh snapshot
    pub new: Vec<String>,
}

impl DiffResult {
    /// True when nothing changed.
    pub fn is_clean(&self) -> bool {
        self.modified.is_empty() && self.deleted.is_empty() && self.new.is_empty()
    }

    /// Number of changed paths across all three lists.
    pub fn total(&self) -> usize {
        self.modified.len() + self.deleted.len() + self.new.len()
    }
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} modified, {} deleted, {} new",
            self.modified.len(),
            self.deleted.len(),
            self.new.len()
        )
    }
}
