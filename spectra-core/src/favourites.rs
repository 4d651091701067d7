//! Favourites store mirrored to a durable key-value port

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::models::FavouriteItem;

/// Storage key holding the JSON-encoded favourites array.
pub const FAVOURITES_KEY: &str = "favourites";

/// Durable string key-value storage (browser local storage in the web app).
///
/// Writes are fire-and-forget: a failed write is the storage's problem to
/// log, the in-memory list stays authoritative.
pub trait FavouritesStorage {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&self, key: &str, value: &str);
}

/// In-memory storage, shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavouritesStorage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
    }
}

/// The user's favourites. No two entries share an `id`.
pub struct Favourites<S: FavouritesStorage> {
    items: Vec<FavouriteItem>,
    storage: S,
}

impl<S: FavouritesStorage> Favourites<S> {
    /// Read the stored list. Missing or unreadable data starts an empty list.
    pub fn load(storage: S) -> Self {
        let items = match storage.get_string(FAVOURITES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<FavouriteItem>>(&raw) {
                Ok(items) => dedup_by_id(items),
                Err(e) => {
                    warn!("Discarding unreadable favourites: {e}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        debug!("Loaded {} favourites", items.len());
        Self { items, storage }
    }

    pub fn items(&self) -> &[FavouriteItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|f| f.id == id)
    }

    /// Append `item` unless its id is already saved. Returns whether it was added.
    pub fn add(&mut self, item: FavouriteItem) -> bool {
        if self.contains(item.id) {
            debug!("Item {} already in favourites", item.id);
            return false;
        }

        debug!("Adding {} to favourites", item.id);
        self.items.push(item);
        self.persist();
        true
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.id != id);

        if self.items.len() == before {
            return false;
        }

        debug!("Removed {id} from favourites");
        self.persist();
        true
    }

    fn persist(&self) {
        match serde_json::to_string(&self.items) {
            Ok(json) => self.storage.set_string(FAVOURITES_KEY, &json),
            Err(e) => warn!("Failed to serialize favourites: {e}"),
        }
    }
}

fn dedup_by_id(items: Vec<FavouriteItem>) -> Vec<FavouriteItem> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.id)).collect()
}
