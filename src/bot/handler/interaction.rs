//! Slash command interaction handler.
//!
//! Every command is deferred first so slow content APIs cannot exceed Discord's
//! three-second acknowledgement window, then dispatched and answered by editing the
//! deferred response. Failures are logged in full and the user only ever sees the
//! message `AppError::user_message` allows.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serenity::all::{
    CommandInteraction, Context, EditInteractionResponse, Interaction, ResolvedValue,
};

use crate::bot::command::{dispatch, is_ephemeral, CommandInput, CommandReply, OptionValue};
use crate::service::delivery::build_content_embed;
use crate::state::AppState;

const UNEXPECTED_FAILURE: &str = "Something went wrong while running that command.";

/// Handles the interaction_create event.
///
/// Only application commands are handled; other interaction types are ignored.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context used to respond to the interaction
/// - `interaction` - Interaction received from the gateway
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let name = command.data.name.clone();
    state.stats.command_started(&name, &command.user.name).await;

    let started = Instant::now();
    let deferred = if is_ephemeral(&name) {
        command.defer_ephemeral(&ctx.http).await
    } else {
        command.defer(&ctx.http).await
    };

    if let Err(e) = deferred {
        tracing::error!("Failed to acknowledge /{}: {:?}", name, e);
        state.stats.command_finished(&name).await;
        return;
    }

    let input = command_input(&command, Some(started.elapsed()));
    let response = run_command(state, input).await;

    if let Err(e) = command.edit_response(&ctx.http, response).await {
        tracing::error!("Failed to respond to /{}: {:?}", name, e);
    }

    state.stats.command_finished(&name).await;
}

/// Runs a command on its own task so a panic is reported to the user as a failure.
async fn run_command(state: &AppState, input: CommandInput) -> EditInteractionResponse {
    let task_state = state.clone();
    let name = input.name.clone();
    let user = input.user.clone();

    let result = tokio::spawn(async move { dispatch(&task_state, &input).await }).await;

    match result {
        Ok(Ok(reply)) => build_response(reply),
        Ok(Err(e)) => {
            tracing::error!("/{} failed for {}: {}", name, user, e);
            EditInteractionResponse::new().content(e.user_message())
        }
        Err(e) => {
            tracing::error!("/{} panicked for {}: {}", name, user, e);
            EditInteractionResponse::new().content(UNEXPECTED_FAILURE)
        }
    }
}

fn build_response(reply: CommandReply) -> EditInteractionResponse {
    let mut response = EditInteractionResponse::new();

    if let Some(text) = reply.text {
        response = response.content(text);
    }
    if let Some(content) = reply.content {
        response = response.embed(build_content_embed(&content, reply.color));
    }

    response
}

/// Extracts the pieces of an interaction the command layer needs.
fn command_input(command: &CommandInteraction, round_trip: Option<Duration>) -> CommandInput {
    let options = command
        .data
        .options()
        .into_iter()
        .filter_map(|option| {
            let value = match option.value {
                ResolvedValue::String(value) => OptionValue::String(value.to_string()),
                ResolvedValue::Channel(channel) => OptionValue::Channel(channel.id.get().to_string()),
                _ => return None,
            };
            Some((option.name.to_string(), value))
        })
        .collect::<HashMap<_, _>>();

    CommandInput {
        name: command.data.name.clone(),
        guild_id: command.guild_id.map(|id| id.get().to_string()),
        user: command.user.name.clone(),
        options,
        round_trip,
    }
}
