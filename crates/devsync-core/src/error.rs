//! Error types for devsync-core

/// Result type for devsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in devsync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Profile lookup or store failure
    #[error(transparent)]
    Fs(#[from] devsync_fs::Error),

    /// The external program could not be started at all
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
