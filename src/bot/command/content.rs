use crate::bot::command::{CommandInput, CommandReply};
use crate::error::AppError;
use crate::service::delivery::{MEME_COLOR, VERSE_COLOR};
use crate::service::provider::meme::subreddit_name;
use crate::state::AppState;

/// `/verse [reference]`: a random verse, or the referenced one.
pub async fn verse(state: &AppState, input: &CommandInput) -> Result<CommandReply, AppError> {
    let content = match input.string("reference") {
        Some(reference) => state.verses.fetch_named(reference).await.ok_or_else(|| {
            AppError::NotFound(format!(
                "Couldn't find the verse '{}'. Check the reference and try again.",
                reference
            ))
        })?,
        None => state.verses.fetch_random().await.ok_or_else(|| {
            AppError::NotFound("Couldn't fetch a verse right now, please try again later.".to_string())
        })?,
    };

    Ok(CommandReply::content(content, VERSE_COLOR))
}

/// `/meme [subreddit]`: a random meme, optionally from a given subreddit.
pub async fn meme(state: &AppState, input: &CommandInput) -> Result<CommandReply, AppError> {
    let content = match input.string("subreddit") {
        Some(raw) => {
            let subreddit = subreddit_name(raw).ok_or_else(|| {
                AppError::BadRequest(format!("'{}' is not a subreddit name.", raw))
            })?;
            state.memes.fetch_named(subreddit).await
        }
        None => state.memes.fetch_random().await,
    };

    content
        .map(|content| CommandReply::content(content, MEME_COLOR))
        .ok_or_else(|| {
            AppError::NotFound("Couldn't fetch a meme right now, please try again later.".to_string())
        })
}
