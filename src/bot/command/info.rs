use std::fmt::Write;

use crate::bot::command::{CommandInput, CommandReply, COMMANDS};
use crate::model::registry::RegistryKind;
use crate::service::stats::format_uptime;
use crate::state::AppState;

/// Number of command log entries shown by `/status`.
const RECENT_COMMANDS: usize = 5;

/// `/ping`: liveness check, reporting the acknowledgement round trip when known.
pub fn ping(input: &CommandInput) -> CommandReply {
    match input.round_trip {
        Some(round_trip) => CommandReply::text(format!("Pong! ({} ms)", round_trip.as_millis())),
        None => CommandReply::text("Pong!"),
    }
}

pub fn uptime(state: &AppState) -> CommandReply {
    CommandReply::text(format!(
        "I've been running for {}.",
        format_uptime(state.stats.uptime())
    ))
}

pub fn help() -> CommandReply {
    let mut text = String::from("**Commands**\n");
    for spec in COMMANDS {
        let _ = writeln!(text, "`/{}` - {}", spec.name, spec.description);
    }

    CommandReply::text(text.trim_end())
}

/// `/status`: server count, command usage, subscriptions and broadcast health.
pub async fn status(state: &AppState) -> CommandReply {
    let snapshot = state.stats.snapshot().await;

    let mut text = String::from("**Status**\n");
    let _ = writeln!(text, "Servers: {}", snapshot.guild_count);
    let _ = writeln!(text, "Uptime: {}", format_uptime(snapshot.uptime));
    let _ = writeln!(text, "Commands used: {}", snapshot.commands_used);

    // The invocation answering this reply is itself counted as running.
    let mut running = snapshot.current_commands;
    if let Some(own) = running.iter().position(|command| command == "status") {
        running.remove(own);
    }
    if !running.is_empty() {
        let _ = writeln!(text, "Running now: /{}", running.join(", /"));
    }

    for kind in RegistryKind::ALL {
        let subscriptions = state.registries.get(kind).len().await;
        let counters = snapshot.broadcasts.get(&kind).cloned().unwrap_or_default();
        let last = counters
            .last_cycle_at
            .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| "never".to_string());

        let _ = writeln!(
            text,
            "{}: {} subscribed, last run {}, {} delivered, {} without content, {} failed, {} skipped cycles",
            capitalize(kind.label()),
            subscriptions,
            last,
            counters.delivered,
            counters.absent,
            counters.failed,
            counters.cycles_skipped
        );
    }

    if !snapshot.command_log.is_empty() {
        text.push_str("**Recent commands**\n");
        for entry in snapshot.command_log.iter().rev().take(RECENT_COMMANDS) {
            let _ = writeln!(
                text,
                "`/{}` by {} at {}",
                entry.command,
                entry.user,
                entry.time.format("%H:%M:%S UTC")
            );
        }
    }

    CommandReply::text(text.trim_end())
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
