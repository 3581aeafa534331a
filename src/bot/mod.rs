//! Discord bot integration: gateway connection, event handling and slash commands.
//!
//! The bot is initialized during startup and runs in a separate tokio task. Its HTTP
//! client is shared with the broadcast scheduler so scheduled posts and command replies
//! go through the same Discord connection.
//!
//! # Gateway Intents
//!
//! The bot only requires `GUILDS`, to receive guild create/delete events used for the
//! server count. Slash commands arrive as interactions and need no extra intent.

pub mod command;
pub mod handler;
pub mod start;
