//! Local persistence adapter.
//!
//! Saves the durable subset of catalog state to `localStorage` and restores
//! it on the next session. Writes are fire-and-forget: a failed write is
//! logged and the session continues with in-memory state only.

use contracts::catalog::StoredCatalog;
use web_sys::window;

const STORAGE_KEY: &str = "catalog-storage";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Restore the persisted snapshot, if one exists and is readable.
/// Corrupt or future-versioned payloads are dropped, not migrated.
pub fn load() -> Option<StoredCatalog> {
    let raw = get_local_storage()?.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str::<StoredCatalog>(&raw) {
        Ok(snapshot) if snapshot.is_loadable() => Some(snapshot),
        Ok(snapshot) => {
            log::warn!(
                "ignoring persisted state with unsupported version {}",
                snapshot.version
            );
            None
        }
        Err(e) => {
            log::warn!("ignoring unreadable persisted state: {e}");
            None
        }
    }
}

/// Write the snapshot. Quota or serialization failures are logged only.
pub fn save(snapshot: &StoredCatalog) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(snapshot) {
        Ok(json) => {
            if storage.set_item(STORAGE_KEY, &json).is_err() {
                log::warn!("failed to persist catalog state");
            }
        }
        Err(e) => log::warn!("failed to serialize catalog state: {e}"),
    }
}
