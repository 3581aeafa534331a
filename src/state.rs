//! Application state shared across all event handlers.
//!
//! `AppState` is built once at startup and cloned into the Discord event handler. Every
//! field is reference-counted, so clones share the same registries, providers and
//! stats.

use std::sync::Arc;

use crate::data::subscription::SubscriptionRegistry;
use crate::model::registry::RegistryKind;
use crate::service::{provider::ContentProvider, stats::BotStats};

/// One subscription registry per content stream.
#[derive(Clone)]
pub struct Registries {
    pub verse: Arc<SubscriptionRegistry>,
    pub daily_verse: Arc<SubscriptionRegistry>,
    pub meme: Arc<SubscriptionRegistry>,
}

impl Registries {
    pub fn get(&self, kind: RegistryKind) -> &Arc<SubscriptionRegistry> {
        match kind {
            RegistryKind::Verse => &self.verse,
            RegistryKind::DailyVerse => &self.daily_verse,
            RegistryKind::Meme => &self.meme,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub registries: Registries,

    /// Bible verse source, shared by the verse and daily verse streams.
    pub verses: Arc<dyn ContentProvider>,

    pub memes: Arc<dyn ContentProvider>,

    pub stats: BotStats,
}

impl AppState {
    pub fn new(
        registries: Registries,
        verses: Arc<dyn ContentProvider>,
        memes: Arc<dyn ContentProvider>,
        stats: BotStats,
    ) -> Self {
        Self {
            registries,
            verses,
            memes,
            stats,
        }
    }

    /// Content provider feeding the given registry.
    pub fn provider_for(&self, kind: RegistryKind) -> Arc<dyn ContentProvider> {
        if kind.is_verse() {
            self.verses.clone()
        } else {
            self.memes.clone()
        }
    }
}
