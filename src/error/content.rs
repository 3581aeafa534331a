use reqwest::StatusCode;
use thiserror::Error;

/// Reasons a content fetch produced nothing.
///
/// Only used inside the content providers, which log the error and hand back absent
/// content instead of returning it.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Timeout, connection failure or undecodable body.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("Unexpected status {0}")]
    Status(StatusCode),

    /// The API answered 2xx but the payload is unusable.
    #[error("Malformed payload: {0}")]
    Malformed(String),
}
