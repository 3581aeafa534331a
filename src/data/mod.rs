//! Persistence layer for subscription registries.
//!
//! This module contains the repository that owns a guild→channel mapping and keeps it in
//! sync with its JSON file. Repositories work with domain models from `model/` and keep
//! the on-disk representation private to this layer.

pub mod subscription;

#[cfg(test)]
mod test;
