//! Trust store parsing
//!
//! Reads a `known_hosts`-style file and extracts one [`TrustEntry`] per host
//! alias whose key type belongs to the requested family. Anything the parser
//! does not understand is skipped, never reported as an error.

use std::path::{Path, PathBuf};

/// Key family surfaced by default
pub const DEFAULT_KEY_FAMILY: &str = "ssh-rsa";

/// A host alias the user's remote-shell client has a trusted key for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustEntry {
    pub host: String,
    pub key_type: String,
}

/// `~/.ssh/known_hosts`, if a home directory can be determined.
pub fn default_trust_store_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh").join("known_hosts"))
}

/// Parse trust store text, keeping entries whose key type contains
/// `key_family`. Order follows the file.
pub fn parse_trust_store(content: &str, key_family: &str) -> Vec<TrustEntry> {
    let mut entries = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [hosts, key_type, _key, ..] = fields.as_slice() else {
            continue;
        };
        if !key_type.contains(key_family) {
            continue;
        }

        entries.extend(hosts.split(',').filter_map(parse_alias).map(|host| TrustEntry {
            host: host.to_string(),
            key_type: key_type.to_string(),
        }));
    }

    entries
}

/// Read and parse the trust store at `path`.
///
/// A missing or unreadable file yields no entries.
pub fn load_trust_store(path: &Path, key_family: &str) -> Vec<TrustEntry> {
    match std::fs::read(path) {
        Ok(bytes) => parse_trust_store(&String::from_utf8_lossy(&bytes), key_family),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No trust store");
            Vec::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not read trust store");
            Vec::new()
        }
    }
}

/// Strip `[host]:port` bracket notation. The port is dropped.
fn parse_alias(alias: &str) -> Option<&str> {
    let alias = alias.trim();
    let host = match alias.strip_prefix('[') {
        Some(rest) => &rest[..rest.find(']')?],
        None => alias,
    };
    (!host.is_empty()).then_some(host)
}
