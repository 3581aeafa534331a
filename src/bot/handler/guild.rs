//! Guild event handlers keeping the server count current.
//!
//! `guild_create` fires on startup for every guild the bot is in, when it joins a new
//! guild, and when a guild comes back after an outage. `guild_delete` fires when the bot
//! is removed or a guild becomes unavailable. Both read the count back from the cache.

use serenity::all::{Context, Guild, UnavailableGuild};

use crate::state::AppState;

/// Handles the guild_create event.
///
/// # Arguments
/// - `state` - Shared application state holding the stats handle
/// - `ctx` - Discord context providing the guild cache
/// - `guild` - Guild that became available
/// - `is_new` - Whether the bot just joined this guild
pub async fn handle_guild_create(state: &AppState, ctx: Context, guild: Guild, is_new: Option<bool>) {
    if is_new == Some(true) {
        tracing::info!("Joined guild {} ({})", guild.name, guild.id);
    } else {
        tracing::debug!("Guild available: {} ({})", guild.name, guild.id);
    }

    state.stats.set_guild_count(ctx.cache.guild_count());
}

/// Handles the guild_delete event.
///
/// Subscriptions of the departed guild are kept; their deliveries fail and are counted
/// until the guild re-invites the bot.
pub async fn handle_guild_delete(
    state: &AppState,
    ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", incomplete.id);
    } else {
        tracing::info!("Removed from guild {}", incomplete.id);
    }

    state.stats.set_guild_count(ctx.cache.guild_count());
}
