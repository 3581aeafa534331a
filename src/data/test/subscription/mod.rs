use crate::{
    data::subscription::SubscriptionRegistry,
    error::{registry::RegistryError, AppError},
    model::subscription::{Payload, SubscriptionEntry},
};
use serde_json::json;
use test_utils::builder::TestBuilder;

mod all;
mod load;
mod set;

const FILE: &str = "verse_channels.json";
