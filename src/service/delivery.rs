//! Delivery of content to Discord channels.
//!
//! The broadcaster only sees the `DeliverySink` trait; `DiscordSink` is the production
//! implementation posting through the bot's shared serenity HTTP client.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::error::delivery::DeliveryError;
use crate::model::content::Content;
use crate::util::parse::parse_snowflake;

/// Embed colour used for verses.
pub const VERSE_COLOR: u32 = 0xf5c542;
/// Embed colour used for memes.
pub const MEME_COLOR: u32 = 0x1db954;

/// Destination for broadcast content.
#[async_trait]
pub trait DeliverySink: Send + Sync {
    /// Sends content to one channel. A failure only concerns this channel.
    async fn deliver(&self, channel_id: &str, content: &Content) -> Result<(), DeliveryError>;
}

/// Builds the embed used both for broadcasts and for command replies.
///
/// Text becomes the description and the attachment, if any, the embed image. Empty text
/// is left out since Discord rejects empty descriptions.
pub fn build_content_embed(content: &Content, color: u32) -> CreateEmbed {
    let mut embed = CreateEmbed::new().color(color);

    if !content.display_text.is_empty() {
        embed = embed.description(&content.display_text);
    }

    if let Some(url) = &content.attachment_url {
        embed = embed.image(url);
    }

    embed
}

/// Posts content as an embed message through the Discord HTTP API.
pub struct DiscordSink {
    http: Arc<Http>,
    color: u32,
}

impl DiscordSink {
    /// Creates a new DiscordSink instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client shared with the bot
    /// - `color` - Embed colour for every message sent through this sink
    pub fn new(http: Arc<Http>, color: u32) -> Self {
        Self { http, color }
    }
}

#[async_trait]
impl DeliverySink for DiscordSink {
    async fn deliver(&self, channel_id: &str, content: &Content) -> Result<(), DeliveryError> {
        let channel_id_u64 = parse_snowflake(channel_id)
            .map_err(|_| DeliveryError::InvalidChannelId(channel_id.to_string()))?;
        let channel_id = ChannelId::new(channel_id_u64);

        let message = CreateMessage::new().embed(build_content_embed(content, self.color));
        channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}
