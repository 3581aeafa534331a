//! Business logic between the Discord-facing bot layer and the data layer.
//!
//! - `provider` - fetching verses and memes from external APIs
//! - `delivery` - posting content to Discord channels
//! - `subscription` - assigning channels to guilds
//! - `broadcast` - the periodic per-guild fan-out
//! - `stats` - uptime, command usage and broadcast counters

pub mod broadcast;
pub mod delivery;
pub mod provider;
pub mod stats;
pub mod subscription;
