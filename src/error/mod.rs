//! Error types and user-facing error mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors. Where the bot talks back to
//! a Discord user, `AppError::user_message` decides what the user is allowed to see; the
//! full error is only ever logged.
//!
//! Failures of the content providers and of delivery never reach this type on the
//! broadcast path: providers collapse them to absent content and the broadcaster counts
//! delivery errors per entry.

pub mod config;
pub mod content;
pub mod delivery;
pub mod internal;
pub mod registry;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, registry::RegistryError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Subscription registry could not be loaded or persisted.
    ///
    /// At startup this aborts the process with the offending file named in the message.
    /// During a configuration command it tells the user the setting was not saved.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Internal issue indicating unexpected input or a possible bug.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// HTTP client construction error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Requested content or resource does not exist.
    ///
    /// The message is shown to the user as-is.
    #[error("{0}")]
    NotFound(String),

    /// Invalid command input.
    ///
    /// The message is shown to the user as-is.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Message shown to the Discord user who triggered the failing command.
    ///
    /// Maps each error variant to a safe, user-friendly message:
    /// - `BadRequest` / `NotFound` - the carried message
    /// - `RegistryErr` - the configuration change was not saved
    /// - Everything else - a generic notice, with details left to the logs
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => msg.clone(),
            Self::RegistryErr(_) => {
                "That setting could not be saved, please try again later.".to_string()
            }
            _ => "Something went wrong while running that command.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_message_is_shown_verbatim() {
        let err = AppError::BadRequest("Pick a text channel".to_string());
        assert_eq!(err.user_message(), "Pick a text channel");
    }

    #[test]
    fn registry_error_reports_unsaved_setting() {
        let err = AppError::RegistryErr(RegistryError::Serialize(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        ));
        assert!(err.user_message().contains("could not be saved"));
    }

    #[test]
    fn internal_error_is_hidden_from_user() {
        let err = AppError::InternalErr(InternalError::ParseStringId {
            value: "abc".to_string(),
            source: "abc".parse::<u64>().unwrap_err(),
        });
        let message = err.user_message();
        assert!(!message.contains("abc"));
        assert_eq!(message, "Something went wrong while running that command.");
    }
}
