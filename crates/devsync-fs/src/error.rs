//! Error types for devsync-fs

use std::path::PathBuf;

/// Result type for devsync-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in devsync-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} profiles at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Failed to serialize {format} profiles for {path}: {message}")]
    ConfigSerialize {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },

    #[error("Profile '{name}' not found. Run 'devsync list' to see profiles.")]
    ProfileNotFound { name: String },

    #[error("Profile '{name}' already exists. Use --force to overwrite.")]
    ProfileExists { name: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for lookups of a profile name that is not in the store.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProfileNotFound { .. })
    }
}
