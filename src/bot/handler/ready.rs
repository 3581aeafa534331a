//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after the initial handshake. Used to register the
//! global slash commands, set the bot's activity and seed the server count.

use serenity::all::{ActivityData, Command, Context, Ready};

use crate::bot::command::definitions;
use crate::state::AppState;

/// Handles the ready event when the bot connects to Discord.
///
/// Command registration overwrites the full global command set, so commands removed
/// from the bot disappear from Discord as well. A registration failure is logged and
/// the bot keeps running with whatever commands Discord already has.
///
/// # Arguments
/// - `state` - Shared application state holding the stats handle
/// - `ctx` - Discord context for setting activity status and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    state.stats.set_guild_count(ready.guilds.len());

    match Command::set_global_commands(&ctx.http, definitions()).await {
        Ok(commands) => tracing::info!("Registered {} slash commands", commands.len()),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }

    ctx.set_activity(Some(ActivityData::watching("for /verse")));
}
