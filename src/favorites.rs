//! Favorites Store
//!
//! Ordered, url-unique list of favorite cats, written back to its
//! key-value slot after every mutation.

use serde_json::Value;

use crate::models::{CatRecord, FavoriteRecord};
use crate::storage::KeyValueSlot;

/// Result of a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

#[derive(Debug)]
pub struct FavoritesStore<S> {
    slot: S,
    key: String,
    records: Vec<FavoriteRecord>,
}

impl<S: KeyValueSlot> FavoritesStore<S> {
    /// Load favorites from `slot`. Missing or malformed data gives an empty store.
    pub fn load(slot: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let records = match slot.read(&key) {
            Ok(Some(raw)) => parse_favorites(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("Could not read favorites: {}", e);
                Vec::new()
            }
        };
        log::debug!("Loaded {} favorites", records.len());
        Self { slot, key, records }
    }

    pub fn records(&self) -> &[FavoriteRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn contains_url(&self, url: &str) -> bool {
        self.records.iter().any(|fav| fav.url == url)
    }

    /// False for records without a usable url
    pub fn is_favorite(&self, cat: &CatRecord) -> bool {
        cat.image_url().is_some_and(|url| self.contains_url(url))
    }

    /// Add the cat if absent, remove it otherwise, then persist.
    /// Records without a url are ignored.
    pub fn toggle(&mut self, cat: &CatRecord) -> Option<FavoriteToggle> {
        let url = cat.image_url()?;
        let change = match self.records.iter().position(|fav| fav.url == url) {
            Some(index) => {
                self.records.remove(index);
                FavoriteToggle::Removed
            }
            None => {
                self.records.push(FavoriteRecord { url: url.to_string() });
                FavoriteToggle::Added
            }
        };
        self.persist();
        Some(change)
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Could not serialize favorites: {}", e);
                return;
            }
        };
        if let Err(e) = self.slot.write(&self.key, &json) {
            log::error!("Could not save favorites: {}", e);
        }
    }
}

/// Lenient parse of the persisted JSON: keeps entries with a non-empty
/// string `url`, first occurrence wins.
fn parse_favorites(raw: &str) -> Vec<FavoriteRecord> {
    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(Value::Null) => return Vec::new(),
        Ok(_) => {
            log::warn!("Stored favorites are not a list, starting empty");
            return Vec::new();
        }
        Err(e) => {
            log::warn!("Stored favorites are not valid JSON ({}), starting empty", e);
            return Vec::new();
        }
    };

    let mut records: Vec<FavoriteRecord> = Vec::with_capacity(entries.len());
    for entry in entries {
        let Some(url) = entry.get("url").and_then(Value::as_str) else {
            continue;
        };
        if url.is_empty() || records.iter().any(|fav| fav.url == url) {
            continue;
        }
        records.push(FavoriteRecord { url: url.to_string() });
    }
    records
}
