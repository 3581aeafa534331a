//! Content fetched from an external provider and delivered to a channel.

/// One piece of deliverable content: a verse or a meme.
///
/// Providers build it, sinks and command replies render it; nothing in between looks
/// inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Content {
    /// Markdown text shown as the message body.
    pub display_text: String,
    /// Optional image shown under the text.
    pub attachment_url: Option<String>,
}

impl Content {
    /// Creates text-only content.
    pub fn text(display_text: impl Into<String>) -> Self {
        Self {
            display_text: display_text.into(),
            attachment_url: None,
        }
    }

    /// Attaches an image URL.
    pub fn with_attachment(mut self, url: impl Into<String>) -> Self {
        self.attachment_url = Some(url.into());
        self
    }
}
