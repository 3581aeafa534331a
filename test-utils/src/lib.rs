//! Versebot Test Utils
//!
//! Provides shared testing utilities for the versebot crate. The bot persists each
//! subscription registry as a JSON file inside a data directory, so most tests need a
//! throwaway directory, sometimes pre-seeded with registry files in a given state
//! (valid, legacy string-valued, or corrupt).
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for seeding a temporary data directory
//! - **TestContext**: Test environment owning the directory for the test's lifetime
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn loads_existing_registry() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_registry_file("verse_channels.json", serde_json::json!({ "1": "2" }))
//!         .build()?;
//!
//!     let path = test.path("verse_channels.json");
//!     // Load the registry from `path`...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
