use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TestError;

/// Test environment owning a temporary data directory.
///
/// The directory and everything in it is removed when the context is dropped, so keep
/// the context alive for as long as the code under test needs its files.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Creates a context around a fresh, empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Directory created
    /// - `Err(TestError::Io)` - The OS refused to create the directory
    pub fn new() -> Result<Self, TestError> {
        let dir = TempDir::new().map_err(|source| TestError::Io {
            path: std::env::temp_dir(),
            source,
        })?;

        Ok(Self { dir })
    }

    /// Root of the temporary data directory.
    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file inside the data directory. The file need not exist.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Returns true if the named file exists inside the data directory.
    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Reads and parses a JSON file from the data directory.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed file contents
    /// - `Err(TestError::Io)` - File missing or unreadable
    /// - `Err(TestError::Json)` - File is not valid JSON
    pub fn read_json(&self, name: &str) -> Result<serde_json::Value, TestError> {
        let path = self.path(name);
        let contents =
            std::fs::read_to_string(&path).map_err(|source| TestError::Io { path, source })?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Writes verbatim contents to a file, replacing it if present.
    pub fn write_raw(&self, name: &str, contents: &str) -> Result<(), TestError> {
        let path = self.path(name);
        std::fs::write(&path, contents).map_err(|source| TestError::Io { path, source })
    }
}
