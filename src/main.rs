mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let registries = startup::load_registries(&config).await?;
    let http_client = startup::setup_reqwest_client(&config)?;
    let state = startup::build_state(&config, registries, http_client);

    tracing::info!("Starting versebot");

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, state.clone()).await?;
    let shard_manager = bot_client.shard_manager.clone();

    let broadcasters = startup::build_broadcasters(&config, &state, discord_http);
    let mut scheduler = scheduler::broadcast::start_scheduler(broadcasters).await?;

    // Start Discord bot in a separate task
    let bot_task = tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(bot_client).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
        _ = bot_task => {
            tracing::warn!("Discord bot stopped, shutting down");
        }
    }

    if let Err(e) = scheduler.shutdown().await {
        tracing::error!("Failed to stop broadcast scheduler: {}", e);
    }

    Ok(())
}
