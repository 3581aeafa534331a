use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_VERSE_API_URL: &str = "https://bible-api.com";
const DEFAULT_MEME_API_URL: &str = "https://meme-api.com";

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;
const MIN_FETCH_TIMEOUT_SECS: u64 = 4;
const MAX_FETCH_TIMEOUT_SECS: u64 = 5;

const DEFAULT_VERSE_INTERVAL_SECS: u64 = 60 * 60;
const DEFAULT_DAILY_VERSE_INTERVAL_SECS: u64 = 24 * 60 * 60;
const DEFAULT_MEME_INTERVAL_SECS: u64 = 10 * 60;

pub struct Config {
    pub discord_bot_token: String,

    /// Directory holding one JSON file per subscription registry.
    pub data_dir: PathBuf,

    pub verse_api_url: Url,
    pub meme_api_url: Url,

    /// Upper bound on any single content fetch.
    pub fetch_timeout: Duration,

    pub verse_interval: Duration,
    pub daily_verse_interval: Duration,
    pub meme_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            data_dir: std::env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            verse_api_url: parse_url(
                "VERSE_API_URL",
                optional_var("VERSE_API_URL").as_deref(),
                DEFAULT_VERSE_API_URL,
            )?,
            meme_api_url: parse_url(
                "MEME_API_URL",
                optional_var("MEME_API_URL").as_deref(),
                DEFAULT_MEME_API_URL,
            )?,
            fetch_timeout: parse_timeout(optional_var("FETCH_TIMEOUT_SECS").as_deref())?,
            verse_interval: parse_interval(
                "VERSE_INTERVAL_SECS",
                optional_var("VERSE_INTERVAL_SECS").as_deref(),
                DEFAULT_VERSE_INTERVAL_SECS,
            )?,
            daily_verse_interval: parse_interval(
                "DAILY_VERSE_INTERVAL_SECS",
                optional_var("DAILY_VERSE_INTERVAL_SECS").as_deref(),
                DEFAULT_DAILY_VERSE_INTERVAL_SECS,
            )?,
            meme_interval: parse_interval(
                "MEME_INTERVAL_SECS",
                optional_var("MEME_INTERVAL_SECS").as_deref(),
                DEFAULT_MEME_INTERVAL_SECS,
            )?,
        })
    }
}

/// Reads an optional variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn invalid(name: &str, value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_secs(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| invalid(name, value, "expected a whole number of seconds"))
}

fn parse_interval(name: &str, value: Option<&str>, default: u64) -> Result<Duration, ConfigError> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(default));
    };

    match parse_secs(name, value)? {
        0 => Err(invalid(name, value, "interval must be greater than zero")),
        secs => Ok(Duration::from_secs(secs)),
    }
}

fn parse_timeout(value: Option<&str>) -> Result<Duration, ConfigError> {
    const NAME: &str = "FETCH_TIMEOUT_SECS";

    let Some(value) = value else {
        return Ok(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS));
    };

    match parse_secs(NAME, value)? {
        secs @ MIN_FETCH_TIMEOUT_SECS..=MAX_FETCH_TIMEOUT_SECS => Ok(Duration::from_secs(secs)),
        _ => Err(invalid(NAME, value, "timeout must be 4 or 5 seconds")),
    }
}

fn parse_url(name: &str, value: Option<&str>, default: &str) -> Result<Url, ConfigError> {
    let raw = value.unwrap_or(default);
    Url::parse(raw).map_err(|e| invalid(name, raw, &e.to_string()))
}
