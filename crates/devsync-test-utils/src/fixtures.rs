//! Filesystem fixtures and output helpers.

use std::fs;
use std::path::{Path, PathBuf};

use devsync_fs::{Profile, ProfileStore};
use tempfile::TempDir;

/// Turn off ANSI styling so rendered output can be compared as plain text.
pub fn disable_colors() {
    colored::control::set_override(false);
}

/// A profile with two excludes and no trailing slashes on its paths.
pub fn sample_profile() -> Profile {
    Profile::new(
        "dev@192.168.1.187",
        "/Users/dev/Code/app",
        "/home/dev/app",
        vec![".git".to_string(), "node_modules".to_string()],
    )
}

/// A store rooted in `temp` holding [`sample_profile`] under `name`.
///
/// # Panics
/// Panics if the store cannot be written.
pub fn store_with_profile(temp: &TempDir, name: &str) -> ProfileStore {
    let store = ProfileStore::new(temp.path().join("config"), temp.path().join("project"));
    store
        .insert(name, sample_profile(), false, false)
        .unwrap_or_else(|e| panic!("store_with_profile: failed to insert '{name}': {e}"));
    store
}

/// Write a trust store with the given lines and return its path.
///
/// # Panics
/// Panics if the file cannot be written.
pub fn write_known_hosts(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("known_hosts");
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(&path, content)
        .unwrap_or_else(|e| panic!("write_known_hosts: failed to write {}: {e}", path.display()));
    path
}
