use std::sync::Arc;

use serenity::http::Http;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::subscription::SubscriptionRegistry,
    error::AppError,
    model::registry::RegistryKind,
    service::{
        broadcast::Broadcaster,
        delivery::{DiscordSink, MEME_COLOR, VERSE_COLOR},
        provider::{meme::MemeProvider, verse::VerseProvider},
        stats::BotStats,
    },
    state::{AppState, Registries},
};

const DEFAULT_LOG_FILTER: &str = "info,serenity=warn,tracing::span=warn";

/// Installs the global tracing subscriber.
///
/// Honours `RUST_LOG` when set, otherwise logs at info level with serenity's gateway
/// chatter turned down.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds the HTTP client shared by both content providers.
///
/// # Arguments
/// - `config` - Application configuration containing the fetch timeout
///
/// # Returns
/// - `Ok(reqwest::Client)` - Client with the configured request timeout
/// - `Err(AppError::ReqwestErr)` - TLS backend could not be initialised
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.fetch_timeout)
        .user_agent(concat!("versebot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Loads all three subscription registries from the data directory.
///
/// Missing files start empty. A corrupt file aborts startup with an error naming the
/// file, since running with a partially understood registry would silently drop guilds.
///
/// # Arguments
/// - `config` - Application configuration containing the data directory
///
/// # Returns
/// - `Ok(Registries)` - All registries loaded
/// - `Err(AppError::RegistryErr)` - A registry file is unreadable or corrupt
pub async fn load_registries(config: &Config) -> Result<Registries, AppError> {
    let load = |kind: RegistryKind| SubscriptionRegistry::load(config.data_dir.join(kind.file_name()));

    let registries = Registries {
        verse: Arc::new(load(RegistryKind::Verse).await?),
        daily_verse: Arc::new(load(RegistryKind::DailyVerse).await?),
        meme: Arc::new(load(RegistryKind::Meme).await?),
    };

    Ok(registries)
}

/// Builds the shared application state.
///
/// # Arguments
/// - `config` - Application configuration containing the API base URLs
/// - `registries` - Loaded subscription registries
/// - `http_client` - Client used by both content providers
pub fn build_state(config: &Config, registries: Registries, http_client: reqwest::Client) -> AppState {
    let verses = VerseProvider::new(
        http_client.clone(),
        config.verse_api_url.clone(),
        config.fetch_timeout,
    );
    let memes = MemeProvider::new(http_client, config.meme_api_url.clone(), config.fetch_timeout);

    AppState::new(registries, Arc::new(verses), Arc::new(memes), BotStats::new())
}

/// Creates one broadcaster per registry, each delivering through Discord.
///
/// # Arguments
/// - `config` - Application configuration containing the broadcast intervals
/// - `state` - Shared state providing registries, providers and stats
/// - `discord_http` - Discord HTTP client used to post messages
pub fn build_broadcasters(
    config: &Config,
    state: &AppState,
    discord_http: Arc<Http>,
) -> Vec<Arc<Broadcaster>> {
    RegistryKind::ALL
        .into_iter()
        .map(|kind| {
            let (interval, color) = match kind {
                RegistryKind::Verse => (config.verse_interval, VERSE_COLOR),
                RegistryKind::DailyVerse => (config.daily_verse_interval, VERSE_COLOR),
                RegistryKind::Meme => (config.meme_interval, MEME_COLOR),
            };

            Arc::new(Broadcaster::new(
                kind,
                interval,
                state.registries.get(kind).clone(),
                state.provider_for(kind),
                Arc::new(DiscordSink::new(discord_http.clone(), color)),
                state.stats.clone(),
            ))
        })
        .collect()
}
