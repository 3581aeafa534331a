//! Slash command definitions and dispatch.
//!
//! Commands are plain async functions over a `CommandInput` extracted from the
//! interaction, returning a `CommandReply` the interaction handler renders. Nothing in
//! here talks to the gateway, which keeps every command testable without Discord.
//!
//! - `content` - `/verse`, `/meme`
//! - `info` - `/ping`, `/uptime`, `/help`, `/status`
//! - `configure` - `/setversechannel`, `/setdailyverse`, `/setmemechannel`

pub mod configure;
pub mod content;
pub mod info;

#[cfg(test)]
mod test;

use std::collections::HashMap;
use std::time::Duration;

use serenity::all::{ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

use crate::error::AppError;
use crate::model::{content::Content, registry::RegistryKind};
use crate::state::AppState;

/// Static description of one slash command.
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Replies are only visible to the invoking user.
    pub ephemeral: bool,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "verse",
        description: "Get a random Bible verse, or look one up by reference",
        ephemeral: false,
    },
    CommandSpec {
        name: "meme",
        description: "Get a random meme, optionally from a subreddit",
        ephemeral: false,
    },
    CommandSpec {
        name: "ping",
        description: "Check that the bot is responding",
        ephemeral: false,
    },
    CommandSpec {
        name: "uptime",
        description: "Show how long the bot has been running",
        ephemeral: false,
    },
    CommandSpec {
        name: "help",
        description: "List available commands",
        ephemeral: false,
    },
    CommandSpec {
        name: "status",
        description: "Show bot statistics and broadcast health",
        ephemeral: false,
    },
    CommandSpec {
        name: "setversechannel",
        description: "Post a random verse in a channel every hour",
        ephemeral: true,
    },
    CommandSpec {
        name: "setdailyverse",
        description: "Post a daily verse in a channel",
        ephemeral: true,
    },
    CommandSpec {
        name: "setmemechannel",
        description: "Post memes in a channel on a schedule",
        ephemeral: true,
    },
];

/// Returns true if the named command answers ephemerally. Unknown commands do not.
pub fn is_ephemeral(name: &str) -> bool {
    COMMANDS
        .iter()
        .any(|spec| spec.name == name && spec.ephemeral)
}

/// Builds the global slash command set registered on ready.
pub fn definitions() -> Vec<CreateCommand> {
    COMMANDS
        .iter()
        .map(|spec| {
            let command = CreateCommand::new(spec.name).description(spec.description);

            match spec.name {
                "verse" => command.add_option(string_option("reference", "Verse reference, e.g. John 3:16")),
                "meme" => command.add_option(string_option("subreddit", "Subreddit to pull from, e.g. wholesomememes")),
                "setversechannel" => configure_command(command),
                "setdailyverse" => configure_command(command)
                    .add_option(string_option("reference", "Fixed verse to post every day instead of a random one")),
                "setmemechannel" => configure_command(command)
                    .add_option(string_option("subreddit", "Subreddit to pull memes from instead of the default")),
                _ => command,
            }
        })
        .collect()
}

fn string_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description).required(false)
}

/// Restricts a configuration command to server managers and adds its channel option.
fn configure_command(command: CreateCommand) -> CreateCommand {
    command
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .add_option(
            CreateCommandOption::new(CommandOptionType::Channel, "channel", "Channel to post in")
                .required(true)
                .channel_types(vec![ChannelType::Text, ChannelType::News]),
        )
}

/// Value of a resolved command option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    /// Channel ID as a string.
    Channel(String),
}

/// Everything a command needs from the interaction.
#[derive(Debug, Clone)]
pub struct CommandInput {
    pub name: String,
    /// Absent when the command was invoked in a DM.
    pub guild_id: Option<String>,
    pub user: String,
    pub options: HashMap<String, OptionValue>,
    /// Time Discord took to acknowledge the deferred response.
    pub round_trip: Option<Duration>,
}

impl CommandInput {
    /// Non-blank string option, trimmed.
    pub fn string(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::String(value)) => Some(value.trim()).filter(|v| !v.is_empty()),
            _ => None,
        }
    }

    pub fn channel(&self, name: &str) -> Option<&str> {
        match self.options.get(name) {
            Some(OptionValue::Channel(id)) => Some(id.as_str()),
            _ => None,
        }
    }
}

/// What the interaction handler should reply with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub text: Option<String>,
    /// Rendered as an embed in `color`.
    pub content: Option<Content>,
    pub color: u32,
}

impl CommandReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            content: None,
            color: 0,
        }
    }

    pub fn content(content: Content, color: u32) -> Self {
        Self {
            text: None,
            content: Some(content),
            color,
        }
    }
}

/// Routes a command to its implementation.
///
/// # Returns
/// - `Ok(CommandReply)` - Reply to show the user
/// - `Err(AppError::BadRequest)` - Unknown command or invalid input
/// - `Err(AppError::NotFound)` - No content could be fetched
/// - `Err(AppError::RegistryErr)` - A configuration change could not be saved
pub async fn dispatch(state: &AppState, input: &CommandInput) -> Result<CommandReply, AppError> {
    match input.name.as_str() {
        "verse" => content::verse(state, input).await,
        "meme" => content::meme(state, input).await,
        "ping" => Ok(info::ping(input)),
        "uptime" => Ok(info::uptime(state)),
        "help" => Ok(info::help()),
        "status" => Ok(info::status(state).await),
        "setversechannel" => configure::set_channel(state, input, RegistryKind::Verse).await,
        "setdailyverse" => configure::set_channel(state, input, RegistryKind::DailyVerse).await,
        "setmemechannel" => configure::set_channel(state, input, RegistryKind::Meme).await,
        other => Err(AppError::BadRequest(format!("Unknown command /{}", other))),
    }
}
