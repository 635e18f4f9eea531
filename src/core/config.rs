//! Audit configuration: where the store and the log live.
//!
//! Passed explicitly into every command; nothing reads process-wide paths.
//! An optional TOML file may set either path:
//!
//! ```toml
//! store_path = "/var/lib/tripcheck/hash_db.json"
//! log_path = "/var/log/tripcheck.log"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_PATH: &str = "./hash_db.json";
pub const DEFAULT_LOG_PATH: &str = "./log.txt";

/// File locations used by the command surface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditConfig {
    /// Snapshot store (JSON)
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Append-only audit log (plain text)
    #[serde(default = "default_log_path")]
    pub log_path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_log_path() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_PATH)
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            log_path: default_log_path(),
        }
    }
}

impl AuditConfig {
    /// Parse a TOML config file. Unset keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read config {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("invalid config {}: {}", path.display(), e))
    }

    /// Resolve the effective configuration: explicit overrides win over the
    /// config file, which wins over defaults.
    pub fn resolve(
        config_file: Option<&Path>,
        store_override: Option<PathBuf>,
        log_override: Option<PathBuf>,
    ) -> Result<Self, String> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(store) = store_override {
            config.store_path = store;
        }
        if let Some(log) = log_override {
            config.log_path = log;
        }
        Ok(config)
    }
}
