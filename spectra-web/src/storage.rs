//! Local storage port for the favourites store

use spectra_core::FavouritesStorage;
use tracing::warn;

fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Browser `localStorage`. Reads and writes degrade to no-ops when storage
/// is unavailable (private mode, quota exceeded).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl FavouritesStorage for LocalStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        get_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set_string(&self, key: &str, value: &str) {
        let Some(storage) = get_storage() else {
            warn!("Local storage unavailable, {key} not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            warn!("Failed to write {key} to local storage");
        }
    }
}
