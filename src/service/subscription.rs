//! Channel assignment for guild subscriptions.
//!
//! This is the configuration surface the slash commands call into. It validates the
//! Discord identifiers, normalises the optional payload and writes through to the
//! registry, reporting persistence failures back to the caller.

use crate::data::subscription::SubscriptionRegistry;
use crate::error::AppError;
use crate::model::subscription::{Payload, SubscriptionEntry};
use crate::util::parse::parse_snowflake;

pub struct SubscriptionService<'a> {
    registry: &'a SubscriptionRegistry,
}

impl<'a> SubscriptionService<'a> {
    /// Creates a new SubscriptionService instance.
    ///
    /// # Arguments
    /// - `registry` - Registry the assignments are written to
    pub fn new(registry: &'a SubscriptionRegistry) -> Self {
        Self { registry }
    }

    /// Assigns the delivery channel (and optional fixed payload) for a guild.
    ///
    /// Repeated calls for the same guild overwrite the previous assignment. A blank
    /// payload is treated as no payload, meaning random content every cycle.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `channel_id` - Discord channel ID content should be posted to
    /// - `payload` - Optional verse reference or subreddit name
    ///
    /// # Returns
    /// - `Ok(SubscriptionEntry)` - The entry as stored
    /// - `Err(AppError::BadRequest)` - An ID is not a Discord snowflake
    /// - `Err(AppError::RegistryErr)` - The registry file could not be written; the
    ///   previous assignment remains in effect
    pub async fn assign_channel(
        &self,
        guild_id: &str,
        channel_id: &str,
        payload: Option<&str>,
    ) -> Result<SubscriptionEntry, AppError> {
        let guild_id = validate_id("guild", guild_id)?;
        let channel_id = validate_id("channel", channel_id)?;

        let mut entry = SubscriptionEntry::new(guild_id, channel_id);
        if let Some(payload) = payload.map(str::trim).filter(|p| !p.is_empty()) {
            entry = entry.with_payload(Payload::new(payload));
        }

        self.registry.set(entry.clone()).await?;

        tracing::info!(
            "Guild {} now receives content in channel {} (payload: {:?})",
            entry.guild_id,
            entry.channel_id,
            entry.payload.as_ref().map(|p| p.reference_or_name.as_str())
        );

        Ok(entry)
    }
}

fn validate_id(what: &str, value: &str) -> Result<String, AppError> {
    parse_snowflake(value)
        .map(|id| id.to_string())
        .map_err(|_| AppError::BadRequest(format!("'{}' is not a valid {} ID", value, what)))
}
