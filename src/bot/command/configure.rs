//! Commands assigning a guild's delivery channel for each content stream.

use crate::bot::command::{CommandInput, CommandReply};
use crate::error::AppError;
use crate::model::registry::RegistryKind;
use crate::service::provider::meme::subreddit_name;
use crate::service::subscription::SubscriptionService;
use crate::state::AppState;

/// Name of the optional payload option for a registry, if it takes one.
fn payload_option(kind: RegistryKind) -> Option<&'static str> {
    match kind {
        RegistryKind::Verse => None,
        RegistryKind::DailyVerse => Some("reference"),
        RegistryKind::Meme => Some("subreddit"),
    }
}

/// Assigns the invoking guild's channel for `kind`, overwriting any previous choice.
///
/// # Returns
/// - `Ok(CommandReply)` - Confirmation naming the channel
/// - `Err(AppError::BadRequest)` - Used outside a server or without a channel
/// - `Err(AppError::RegistryErr)` - The assignment could not be saved
pub async fn set_channel(
    state: &AppState,
    input: &CommandInput,
    kind: RegistryKind,
) -> Result<CommandReply, AppError> {
    let guild_id = input
        .guild_id
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server.".to_string()))?;
    let channel_id = input
        .channel("channel")
        .ok_or_else(|| AppError::BadRequest("Please choose a channel.".to_string()))?;
    let mut payload = payload_option(kind).and_then(|option| input.string(option));
    if let (RegistryKind::Meme, Some(raw)) = (kind, payload) {
        payload = Some(subreddit_name(raw).ok_or_else(|| {
            AppError::BadRequest(format!("'{}' is not a subreddit name.", raw))
        })?);
    }

    let entry = SubscriptionService::new(state.registries.get(kind))
        .assign_channel(guild_id, channel_id, payload)
        .await?;

    let mut text = format!("Done! Posting {} content in <#{}>.", kind.label(), entry.channel_id);
    if let Some(payload) = &entry.payload {
        text.push_str(&format!(" Source: {}.", payload.reference_or_name));
    }

    Ok(CommandReply::text(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::command::dispatch;
    use crate::bot::command::test::{input, test_state, with_channel, with_string, FixedProvider};
    use crate::model::subscription::{Payload, SubscriptionEntry};
    use serde_json::json;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn sets_verse_channel_for_guild() -> Result<(), AppError> {
        let test = TestBuilder::new().build().unwrap();
        let state = test_state(&test, FixedProvider::returning(None), FixedProvider::returning(None)).await;

        let reply = dispatch(&state, &with_channel(input("setversechannel"), "channel", "222")).await?;

        assert!(reply.text.unwrap().contains("<#222>"));
        assert_eq!(
            state.registries.verse.all().await,
            vec![SubscriptionEntry::new("111", "222")]
        );
        assert_eq!(test.read_json("verse_channels.json").unwrap(), json!({ "111": "222" }));
        assert_eq!(state.registries.meme.len().await, 0);

        Ok(())
    }

    #[tokio::test]
    async fn daily_verse_keeps_reference() -> Result<(), AppError> {
        let test = TestBuilder::new().build().unwrap();
        let state = test_state(&test, FixedProvider::returning(None), FixedProvider::returning(None)).await;
        let command = with_string(
            with_channel(input("setdailyverse"), "channel", "333"),
            "reference",
            "Psalm 23:1",
        );

        dispatch(&state, &command).await?;

        assert_eq!(
            state.registries.daily_verse.get("111").await,
            Some(SubscriptionEntry::new("111", "333").with_payload(Payload::new("Psalm 23:1")))
        );
        assert_eq!(
            test.read_json("daily_verse_channels.json").unwrap(),
            json!({ "111": { "channelId": "333", "payload": { "referenceOrName": "Psalm 23:1" } } })
        );

        Ok(())
    }

    #[tokio::test]
    async fn verse_channel_ignores_stray_payload() -> Result<(), AppError> {
        let test = TestBuilder::new().build().unwrap();
        let state = test_state(&test, FixedProvider::returning(None), FixedProvider::returning(None)).await;
        let command = with_string(
            with_channel(input("setversechannel"), "channel", "222"),
            "reference",
            "John 1:1",
        );

        dispatch(&state, &command).await?;

        assert_eq!(state.registries.verse.get("111").await.unwrap().payload, None);

        Ok(())
    }

    #[tokio::test]
    async fn meme_channel_stores_bare_subreddit() -> Result<(), AppError> {
        let test = TestBuilder::new().build().unwrap();
        let state = test_state(&test, FixedProvider::returning(None), FixedProvider::returning(None)).await;
        let command = with_string(
            with_channel(input("setmemechannel"), "channel", "444"),
            "subreddit",
            "r/wholesomememes",
        );

        dispatch(&state, &command).await?;

        assert_eq!(
            state.registries.meme.get("111").await.unwrap().payload,
            Some(Payload::new("wholesomememes"))
        );

        Ok(())
    }

    #[tokio::test]
    async fn meme_channel_rejects_empty_subreddit() {
        let test = TestBuilder::new().build().unwrap();
        let state = test_state(&test, FixedProvider::returning(None), FixedProvider::returning(None)).await;
        let command = with_string(
            with_channel(input("setmemechannel"), "channel", "444"),
            "subreddit",
            "r/",
        );

        let result = dispatch(&state, &command).await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("subreddit")));
        assert_eq!(state.registries.meme.len().await, 0);
        assert!(!test.exists("meme_channels.json"));
    }

    #[tokio::test]
    async fn requires_a_guild() {
        let test = TestBuilder::new().build().unwrap();
        let state = test_state(&test, FixedProvider::returning(None), FixedProvider::returning(None)).await;
        let mut command = with_channel(input("setmemechannel"), "channel", "222");
        command.guild_id = None;

        let result = dispatch(&state, &command).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert_eq!(state.registries.meme.len().await, 0);
    }

    #[tokio::test]
    async fn requires_a_channel() {
        let test = TestBuilder::new().build().unwrap();
        let state = test_state(&test, FixedProvider::returning(None), FixedProvider::returning(None)).await;

        let result = dispatch(&state, &input("setmemechannel")).await;

        assert!(matches!(result, Err(AppError::BadRequest(msg)) if msg.contains("channel")));
    }
}
