//! Meme provider.
//!
//! Talks to a meme-api.com compatible service:
//! - `GET {base}/gimme` for a random meme
//! - `GET {base}/gimme/{subreddit}` for a meme from one subreddit
//!
//! Both return `{ "url": "...", "title": "...", "nsfw": false }` among other fields.
//! NSFW posts are never delivered.

use std::time::Duration;

use serde::Deserialize;
use serenity::async_trait;
use url::Url;

use super::{absent_on_error, get_json, with_segment, ContentProvider};
use crate::error::content::ContentError;
use crate::model::content::Content;

#[derive(Debug, Deserialize)]
struct MemeResponse {
    url: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    nsfw: bool,
}

pub struct MemeProvider {
    http: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl MemeProvider {
    pub fn new(http: reqwest::Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            http,
            base_url,
            timeout,
        }
    }

    async fn fetch(&self, subreddit: Option<&str>) -> Result<Content, ContentError> {
        let mut url = with_segment(&self.base_url, "gimme")?;
        if let Some(subreddit) = subreddit {
            url = with_segment(&url, subreddit)?;
        }

        let meme: MemeResponse = get_json(&self.http, url, self.timeout).await?;
        render(meme)
    }
}

/// Normalises a subreddit as typed by a user: trimmed, without a leading `r/`.
///
/// Returns `None` when nothing is left, e.g. for `"r/"`.
pub fn subreddit_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    let name = name.strip_prefix("r/").unwrap_or(name).trim();
    (!name.is_empty()).then_some(name)
}

fn render(meme: MemeResponse) -> Result<Content, ContentError> {
    if meme.nsfw {
        return Err(ContentError::Malformed("meme is marked NSFW".to_string()));
    }

    let image = meme.url.trim();
    if !(image.starts_with("https://") || image.starts_with("http://")) {
        return Err(ContentError::Malformed(format!(
            "meme url '{}' is not an http(s) URL",
            image
        )));
    }

    let title = meme.title.unwrap_or_default();
    Ok(Content::text(title.trim()).with_attachment(image))
}

#[async_trait]
impl ContentProvider for MemeProvider {
    fn name(&self) -> &'static str {
        "meme"
    }

    async fn fetch_random(&self) -> Option<Content> {
        absent_on_error(self.name(), "a random meme", self.fetch(None).await)
    }

    async fn fetch_named(&self, subreddit: &str) -> Option<Content> {
        let result = match subreddit_name(subreddit) {
            Some(name) => self.fetch(Some(name)).await,
            None => Err(ContentError::Malformed(format!(
                "'{}' does not name a subreddit",
                subreddit
            ))),
        };

        absent_on_error(self.name(), subreddit, result)
    }
}
