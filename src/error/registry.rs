use std::path::PathBuf;
use thiserror::Error;

/// Failures loading or persisting a subscription registry file.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The registry file exists but could not be read, or could not be written.
    #[error("Failed to access registry file {path}: {source}")]
    Io {
        /// Registry file (or its temporary sibling) being accessed
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file exists but is not a JSON object of guild subscriptions.
    ///
    /// Raised at startup; the process refuses to run with a half-understood registry.
    /// Fix or remove the named file and restart.
    #[error("Registry file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory mapping could not be serialized.
    #[error("Failed to serialize registry: {0}")]
    Serialize(#[source] serde_json::Error),
}
