use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord client without connecting it.
///
/// The HTTP client is handed back separately so the broadcast scheduler can post
/// messages while the gateway connection runs in its own task.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `state` - Shared application state for the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start, plus its HTTP client
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(config: &Config, state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the client to the gateway and blocks until it shuts down.
///
/// # Returns
/// - `Ok(())` - Client shut down cleanly
/// - `Err(AppError::DiscordErr)` - Connection failed or the gateway rejected the token
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
