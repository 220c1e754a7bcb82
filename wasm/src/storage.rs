//! Browser-backed best-score store

use shared::store::{BestScoreStore, StoreError, BEST_SCORE_KEY};
use web_sys::Storage;

/// Best-score store over `window.localStorage`
///
/// Reads treat a missing or unreadable value as "no best score yet"; only
/// writes surface an error when storage is inaccessible (disabled,
/// sandboxed iframe, quota).
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        Self { storage }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load(&self) -> Option<u32> {
        self.storage
            .as_ref()?
            .get_item(BEST_SCORE_KEY)
            .ok()
            .flatten()?
            .parse()
            .ok()
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_string()))?;
        storage
            .set_item(BEST_SCORE_KEY, &score.to_string())
            .map_err(|_| StoreError::WriteFailed("localStorage rejected the write".to_string()))
    }
}
