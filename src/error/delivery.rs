use thiserror::Error;

/// Failure delivering content to a single channel.
///
/// Unknown channel, missing permissions and transient network errors all surface as
/// `Discord`; the broadcaster treats every variant the same way, as a per-entry failure.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// The stored channel id is not a usable Discord snowflake.
    #[error("Invalid channel id '{0}'")]
    InvalidChannelId(String),

    /// Discord rejected or never received the message.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl From<serenity::Error> for DeliveryError {
    fn from(err: serenity::Error) -> Self {
        DeliveryError::Discord(Box::new(err))
    }
}
