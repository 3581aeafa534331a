//! Domain models shared by the data, service and bot layers.
//!
//! - `subscription` - per-guild registry entries and their on-disk form
//! - `content` - the opaque bundle a provider hands to a delivery sink
//! - `registry` - which independent registry (and content class) an entry belongs to

pub mod content;
pub mod registry;
pub mod subscription;
