//! Bible verse provider.
//!
//! Talks to a bible-api.com compatible service:
//! - `GET {base}/?random=verse` for a random verse
//! - `GET {base}/{reference}` for a specific reference such as `John 3:16`
//!
//! Both return `{ "reference": "...", "text": "..." }` among other fields.

use std::time::Duration;

use serde::Deserialize;
use serenity::async_trait;
use url::Url;

use super::{absent_on_error, get_json, with_segment, ContentProvider};
use crate::error::content::ContentError;
use crate::model::content::Content;

#[derive(Debug, Deserialize)]
struct VerseResponse {
    reference: String,
    text: String,
}

pub struct VerseProvider {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl VerseProvider {
    pub fn new(http: reqwest::Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            http,
            base_url,
            timeout,
        }
    }

    async fn fetch(&self, url: Url) -> Result<Content, ContentError> {
        let verse: VerseResponse = get_json(&self.http, url, self.timeout).await?;
        render(verse)
    }
}

/// Renders a verse as a bold reference line followed by the verse text.
fn render(verse: VerseResponse) -> Result<Content, ContentError> {
    let reference = verse.reference.trim();
    let text = verse.text.trim();

    if reference.is_empty() || text.is_empty() {
        return Err(ContentError::Malformed(
            "verse reference or text is empty".to_string(),
        ));
    }

    Ok(Content::text(format!("**{}**\n{}", reference, text)))
}

#[async_trait]
impl ContentProvider for VerseProvider {
    fn name(&self) -> &'static str {
        "verse"
    }

    async fn fetch_random(&self) -> Option<Content> {
        let mut url = self.base_url.clone();
        url.set_query(Some("random=verse"));

        absent_on_error(self.name(), "a random verse", self.fetch(url).await)
    }

    async fn fetch_named(&self, reference: &str) -> Option<Content> {
        let result = match with_segment(&self.base_url, reference.trim()) {
            Ok(url) => self.fetch(url).await,
            Err(e) => Err(e),
        };

        absent_on_error(self.name(), reference, result)
    }
}
