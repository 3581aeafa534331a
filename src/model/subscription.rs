//! Domain models for guild subscriptions.
//!
//! Defines the in-memory subscription entry and the JSON form it takes inside a registry
//! file. Two on-disk forms exist: a bare channel id string for entries without a payload,
//! and an object carrying the channel id plus the fixed payload.

use serde::{Deserialize, Serialize};

/// Fixed content chosen by a guild, replayed every cycle instead of random content.
///
/// For verse registries this is a Bible reference such as `John 3:16`; for the meme
/// registry it is a subreddit name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub reference_or_name: String,
}

impl Payload {
    pub fn new(reference_or_name: impl Into<String>) -> Self {
        Self {
            reference_or_name: reference_or_name.into(),
        }
    }
}

/// One guild's subscription in a registry.
///
/// A registry holds at most one entry per guild; assigning a channel again overwrites the
/// previous entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionEntry {
    /// Discord guild ID (stored as String).
    pub guild_id: String,
    /// Discord channel ID content is delivered to (stored as String).
    pub channel_id: String,
    /// Fixed content to resolve by name; `None` means random content each cycle.
    pub payload: Option<Payload>,
}

impl SubscriptionEntry {
    pub fn new(guild_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            guild_id: guild_id.into(),
            channel_id: channel_id.into(),
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Converts the stored form to a domain entry at the repository boundary.
    ///
    /// # Arguments
    /// - `guild_id` - Key the value was stored under
    /// - `stored` - The JSON value for that key
    ///
    /// # Returns
    /// - `SubscriptionEntry` - The converted entry
    pub fn from_stored(guild_id: String, stored: StoredEntry) -> Self {
        match stored {
            StoredEntry::Channel(channel_id) => Self {
                guild_id,
                channel_id,
                payload: None,
            },
            StoredEntry::Detailed {
                channel_id,
                payload,
            } => Self {
                guild_id,
                channel_id,
                payload,
            },
        }
    }

    /// Converts the entry to its stored form, using the bare string when there is no payload.
    pub fn to_stored(&self) -> StoredEntry {
        match &self.payload {
            None => StoredEntry::Channel(self.channel_id.clone()),
            Some(payload) => StoredEntry::Detailed {
                channel_id: self.channel_id.clone(),
                payload: Some(payload.clone()),
            },
        }
    }
}

/// Value stored under a guild id in a registry file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredEntry {
    /// `"guildId": "channelId"`
    Channel(String),
    /// `"guildId": { "channelId": "...", "payload": { "referenceOrName": "..." } }`
    Detailed {
        #[serde(rename = "channelId")]
        channel_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<Payload>,
    },
}
