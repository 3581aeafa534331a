use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or inspecting a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create the temporary directory or write/read a seeded file.
    #[error("Test filesystem error at {path}: {source}")]
    Io {
        /// File or directory the operation targeted
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// A file under test did not contain valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
