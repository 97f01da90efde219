//! Resolved runtime settings shared by every command

use std::path::PathBuf;

use devsync_fs::ProfileStore;

use crate::error::{CliError, Result};

/// Where profiles live and which transfer program to run
#[derive(Debug, Clone)]
pub struct Context {
    pub store: ProfileStore,
    pub rsync: String,
}

impl Context {
    /// Resolve the store from an explicit config directory (or the default
    /// `~/.config/devsync`) and the current working directory.
    pub fn resolve(config_dir: Option<PathBuf>, rsync: String) -> Result<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => ProfileStore::default_config_dir().ok_or_else(|| {
                CliError::user("Could not determine the home directory. Pass --config-dir.")
            })?,
        };
        let cwd = std::env::current_dir()?;
        tracing::debug!(config_dir = %config_dir.display(), cwd = %cwd.display(), "Resolved context");

        Ok(Self {
            store: ProfileStore::new(config_dir, cwd),
            rsync,
        })
    }
}
