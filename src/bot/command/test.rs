//! Fixtures shared by the command tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serenity::async_trait;
use test_utils::context::TestContext;

use super::{CommandInput, OptionValue};
use crate::data::subscription::SubscriptionRegistry;
use crate::model::{content::Content, registry::RegistryKind};
use crate::service::{provider::ContentProvider, stats::BotStats};
use crate::state::{AppState, Registries};

/// Provider answering every fetch with fixed content, recording named lookups.
pub struct FixedProvider {
    content: Option<Content>,
    pub named: Mutex<Vec<String>>,
}

impl FixedProvider {
    pub fn returning(content: Option<Content>) -> Arc<Self> {
        Arc::new(Self {
            content,
            named: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ContentProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_random(&self) -> Option<Content> {
        self.content.clone()
    }

    async fn fetch_named(&self, reference: &str) -> Option<Content> {
        self.named.lock().unwrap().push(reference.to_string());
        self.content.clone()
    }
}

/// Builds state over registries stored in the test's data directory.
pub async fn test_state(
    test: &TestContext,
    verses: Arc<FixedProvider>,
    memes: Arc<FixedProvider>,
) -> AppState {
    let load = |kind: RegistryKind| SubscriptionRegistry::load(test.path(kind.file_name()));

    let registries = Registries {
        verse: Arc::new(load(RegistryKind::Verse).await.unwrap()),
        daily_verse: Arc::new(load(RegistryKind::DailyVerse).await.unwrap()),
        meme: Arc::new(load(RegistryKind::Meme).await.unwrap()),
    };

    AppState::new(registries, verses, memes, BotStats::new())
}

/// Builder-style command input for tests.
pub fn input(name: &str) -> CommandInput {
    CommandInput {
        name: name.to_string(),
        guild_id: Some("111".to_string()),
        user: "tester".to_string(),
        options: HashMap::new(),
        round_trip: None,
    }
}

pub fn with_string(mut input: CommandInput, name: &str, value: &str) -> CommandInput {
    input
        .options
        .insert(name.to_string(), OptionValue::String(value.to_string()));
    input
}

pub fn with_channel(mut input: CommandInput, name: &str, id: &str) -> CommandInput {
    input
        .options
        .insert(name.to_string(), OptionValue::Channel(id.to_string()));
    input
}
