//! External content providers.
//!
//! A provider fetches one piece of content from a third-party HTTP API. Whatever goes
//! wrong on the way (timeout, connection error, non-2xx status, unusable payload) is
//! logged and turned into `None`: an outage of the upstream API means "nothing to
//! deliver right now", never an error for the caller.

pub mod meme;
pub mod verse;

use std::time::Duration;

use serde::de::DeserializeOwned;
use serenity::async_trait;
use url::Url;

use crate::error::content::ContentError;
use crate::model::{content::Content, subscription::Payload};

/// Source of deliverable content.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Fetches a random item, or `None` if nothing could be fetched.
    async fn fetch_random(&self) -> Option<Content>;

    /// Fetches a specific item (verse reference or subreddit), or `None`.
    async fn fetch_named(&self, reference: &str) -> Option<Content>;
}

/// Resolves content for an entry: named if it carries a payload, random otherwise.
pub async fn fetch_for(provider: &dyn ContentProvider, payload: Option<&Payload>) -> Option<Content> {
    match payload {
        Some(payload) => provider.fetch_named(&payload.reference_or_name).await,
        None => provider.fetch_random().await,
    }
}

/// Performs a bounded GET and decodes a JSON body.
///
/// # Returns
/// - `Ok(T)` - 2xx response with a body matching `T`
/// - `Err(ContentError::Request)` - Timeout, connection failure or undecodable body
/// - `Err(ContentError::Status)` - Non-2xx response
async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: Url,
    timeout: Duration,
) -> Result<T, ContentError> {
    let response = http.get(url).timeout(timeout).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ContentError::Status(status));
    }

    Ok(response.json::<T>().await?)
}

/// Appends one percent-encoded path segment to a base URL.
fn with_segment(base: &Url, segment: &str) -> Result<Url, ContentError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ContentError::Malformed(format!("{} cannot be a base URL", base)))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}

/// Logs a failed fetch and converts it to absent content.
fn absent_on_error(
    provider: &'static str,
    what: &str,
    result: Result<Content, ContentError>,
) -> Option<Content> {
    match result {
        Ok(content) => Some(content),
        Err(e) => {
            tracing::warn!("{} provider returned nothing for {}: {}", provider, what, e);
            None
        }
    }
}
