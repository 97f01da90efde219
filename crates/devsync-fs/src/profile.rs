//! The persisted sync profile record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Exclude patterns every new profile starts with.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    "node_modules",
    "__pycache__",
    ".venv",
    "venv",
    ".DS_Store",
    "*.pyc",
    ".env",
    "*.md",
];

/// Profiles keyed by name. Sorted so the stored JSON diffs cleanly.
pub type ProfileMap = BTreeMap<String, Profile>;

/// A named pairing of a local directory with a directory on a remote host.
///
/// Paths are stored exactly as entered; trailing-slash handling happens when
/// a transfer is built. Fields are declared in serialized (sorted) order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Glob patterns handed to the transfer tool, in priority order
    #[serde(default)]
    pub excludes: Vec<String>,
    /// Remote endpoint in `user@hostname` form
    pub host: String,
    pub local_path: String,
    pub remote_path: String,
}

impl Profile {
    pub fn new(
        host: impl Into<String>,
        remote_path: impl Into<String>,
        local_path: impl Into<String>,
        excludes: Vec<String>,
    ) -> Self {
        Self {
            excludes,
            host: host.into(),
            local_path: local_path.into(),
            remote_path: remote_path.into(),
        }
    }

    /// Build a profile seeded with [`DEFAULT_EXCLUDES`] followed by `extra`.
    pub fn with_default_excludes(
        host: impl Into<String>,
        remote_path: impl Into<String>,
        local_path: impl Into<String>,
        extra: &[String],
    ) -> Self {
        let excludes = DEFAULT_EXCLUDES
            .iter()
            .map(|s| s.to_string())
            .chain(extra.iter().cloned())
            .collect();
        Self::new(host, remote_path, local_path, excludes)
    }
}
