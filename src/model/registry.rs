//! Identifies the independent subscription registries the bot keeps.

use std::fmt;

/// One independent guild→channel registry.
///
/// Each kind has its own keyspace, storage file and broadcast interval; a guild can be
/// subscribed to all three at once with different channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistryKind {
    /// Random verse posted on the short verse interval.
    Verse,
    /// Guild-chosen (or random) verse posted once a day.
    DailyVerse,
    /// Random meme, optionally from a guild-chosen subreddit.
    Meme,
}

impl RegistryKind {
    pub const ALL: [RegistryKind; 3] = [Self::Verse, Self::DailyVerse, Self::Meme];

    /// Storage file name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Verse => "verse_channels.json",
            Self::DailyVerse => "daily_verse_channels.json",
            Self::Meme => "meme_channels.json",
        }
    }

    /// Human readable name used in logs and command replies.
    pub fn label(self) -> &'static str {
        match self {
            Self::Verse => "verse",
            Self::DailyVerse => "daily verse",
            Self::Meme => "meme",
        }
    }

    /// True for registries fed by the verse provider.
    pub fn is_verse(self) -> bool {
        matches!(self, Self::Verse | Self::DailyVerse)
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
