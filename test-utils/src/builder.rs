use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with a seeded data directory.
///
/// Provides a fluent interface for configuring the files that should exist before the
/// code under test runs. Use the builder pattern to add files, then call `build()` to
/// create the temporary directory and write them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_registry_file("meme_channels.json", serde_json::json!({ "10": "20" }))
///     .with_raw_file("verse_channels.json", "{ not json")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Files to write during `build()`, as (relative name, contents) pairs.
    ///
    /// Files are written in the order they were added; a later file with the same
    /// name replaces the earlier one.
    files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no files configured.
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Adds a pretty-printed JSON registry file to the data directory.
    ///
    /// # Arguments
    /// - `name` - File name relative to the data directory
    /// - `value` - JSON value to serialize as the file contents
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_registry_file(mut self, name: &str, value: serde_json::Value) -> Self {
        let contents = serde_json::to_string_pretty(&value).unwrap_or_default();
        self.files.push((name.to_string(), contents));
        self
    }

    /// Adds a file with verbatim contents, typically used to simulate corrupt storage.
    ///
    /// # Arguments
    /// - `name` - File name relative to the data directory
    /// - `contents` - Exact bytes to write
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_raw_file(mut self, name: &str, contents: &str) -> Self {
        self.files.push((name.to_string(), contents.to_string()));
        self
    }

    /// Builds the test context, creating the temporary directory and all configured files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Directory created and seeded
    /// - `Err(TestError::Io)` - Failed to create the directory or write a file
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (name, contents) in self.files {
            let path = context.path(&name);
            std::fs::write(&path, contents).map_err(|source| TestError::Io { path, source })?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
