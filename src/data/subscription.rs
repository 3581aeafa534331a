//! Subscription registry backed by a JSON file.
//!
//! This module provides the `SubscriptionRegistry`, the process-wide mapping of guild ID
//! to subscription entry for one registry kind. The full mapping is held in memory and
//! written back to disk, in full, whenever an entry is added or changed. Writes go to a
//! temporary sibling file that is renamed over the real one, so a crash mid-write leaves
//! the previous file intact.
//!
//! There is no removal operation: the bot has no unsubscribe command, so entries live
//! as long as the file does.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;

use crate::error::registry::RegistryError;
use crate::model::subscription::{StoredEntry, SubscriptionEntry};

/// Repository providing load/set/snapshot operations for one subscription registry.
///
/// The mutex serializes mutations with each other and with snapshots: `set` holds it
/// across the file write, so a snapshot never observes an entry that failed to persist.
pub struct SubscriptionRegistry {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, SubscriptionEntry>>,
}

impl SubscriptionRegistry {
    /// Loads a registry from its JSON file.
    ///
    /// A missing file (or one containing only whitespace) yields an empty registry. A file
    /// that exists but is not a JSON object of subscriptions is rejected.
    ///
    /// # Arguments
    /// - `path` - Location of the registry file
    ///
    /// # Returns
    /// - `Ok(SubscriptionRegistry)` - Registry populated from disk
    /// - `Err(RegistryError::Io)` - The file exists but could not be read
    /// - `Err(RegistryError::Corrupt)` - The file exists but could not be parsed
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, RegistryError> {
        let path = path.into();
        let entries = read_entries(&path).await?;

        tracing::info!(
            "Loaded {} subscription(s) from {}",
            entries.len(),
            path.display()
        );

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Inserts or overwrites the entry for its guild and persists the whole mapping.
    ///
    /// The in-memory mapping only changes if the file write succeeds; on failure the
    /// previous entry (if any) is restored and the error is returned to the caller.
    ///
    /// # Arguments
    /// - `entry` - Subscription keyed by `entry.guild_id`
    ///
    /// # Returns
    /// - `Ok(())` - Entry stored and flushed to disk
    /// - `Err(RegistryError)` - Serialization or file write failed; nothing changed
    pub async fn set(&self, entry: SubscriptionEntry) -> Result<(), RegistryError> {
        let mut entries = self.entries.lock().await;

        let guild_id = entry.guild_id.clone();
        let previous = entries.insert(guild_id.clone(), entry);

        if let Err(e) = write_entries(&self.path, &entries).await {
            match previous {
                Some(previous) => entries.insert(guild_id, previous),
                None => entries.remove(&guild_id),
            };
            return Err(e);
        }

        Ok(())
    }

    /// Returns a snapshot of every entry, ordered by guild ID.
    ///
    /// The snapshot is a copy; mutations made while the caller iterates it are not
    /// reflected and cannot disturb the iteration.
    pub async fn all(&self) -> Vec<SubscriptionEntry> {
        self.entries.lock().await.values().cloned().collect()
    }

    /// Gets the entry for a single guild.
    pub async fn get(&self, guild_id: &str) -> Option<SubscriptionEntry> {
        self.entries.lock().await.get(guild_id).cloned()
    }

    /// Number of subscribed guilds.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}

async fn read_entries(path: &Path) -> Result<BTreeMap<String, SubscriptionEntry>, RegistryError> {
    let data = match fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
        Err(source) => {
            return Err(RegistryError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if data.trim().is_empty() {
        tracing::warn!("Registry file {} is empty, starting fresh", path.display());
        return Ok(BTreeMap::new());
    }

    let stored: BTreeMap<String, StoredEntry> =
        serde_json::from_str(&data).map_err(|source| RegistryError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(stored
        .into_iter()
        .map(|(guild_id, stored)| {
            let entry = SubscriptionEntry::from_stored(guild_id.clone(), stored);
            (guild_id, entry)
        })
        .collect())
}

/// Overwrites the registry file with the full mapping: temp file, then rename.
async fn write_entries(
    path: &Path,
    entries: &BTreeMap<String, SubscriptionEntry>,
) -> Result<(), RegistryError> {
    let stored: BTreeMap<&str, StoredEntry> = entries
        .iter()
        .map(|(guild_id, entry)| (guild_id.as_str(), entry.to_stored()))
        .collect();
    let json = serde_json::to_string_pretty(&stored).map_err(RegistryError::Serialize)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|source| RegistryError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json.as_bytes())
        .await
        .map_err(|source| RegistryError::Io {
            path: tmp.clone(),
            source,
        })?;
    fs::rename(&tmp, path)
        .await
        .map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}
