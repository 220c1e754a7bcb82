//! Best-score persistence
//!
//! One durable integer under a fixed key, monotonically non-decreasing.
//! The trait is the seam between the session logic and whatever backs it:
//! the wasm crate provides a browser `localStorage` implementation,
//! [`MemoryStore`] backs native callers and tests.

use thiserror::Error;

/// Storage key for the best score achieved
pub const BEST_SCORE_KEY: &str = "v60_best_score";

/// Errors raised when the backing store cannot be written
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    #[error("storage write failed: {0}")]
    WriteFailed(String),
}

/// Durable best-score storage
///
/// A missing or unreadable stored value reads as "no best score yet",
/// never as an error; only writes can fail.
pub trait BestScoreStore {
    /// Read the stored best score, if any
    fn load(&self) -> Option<u32>;

    /// Overwrite the stored best score
    fn save(&mut self, score: u32) -> Result<(), StoreError>;

    /// Merge a candidate into the stored best and persist the result
    ///
    /// The stored value only ever moves up: the new value is
    /// `max(stored, candidate)`, so repeating a commit, or committing a
    /// lower score, leaves the store unchanged.
    fn commit(&mut self, candidate: u32) -> Result<u32, StoreError> {
        let next = self.load().unwrap_or(0).max(candidate);
        self.save(next)?;
        Ok(next)
    }
}

/// In-memory best-score store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&self) -> Option<u32> {
        self.best
    }

    fn save(&mut self, score: u32) -> Result<(), StoreError> {
        self.best = Some(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_commit_first_candidate() {
        let mut store = MemoryStore::new();
        assert_eq!(store.commit(480).unwrap(), 480);
        assert_eq!(store.load(), Some(480));
    }

    #[test]
    fn test_commit_is_non_decreasing() {
        let mut store = MemoryStore::new();
        store.commit(480).unwrap();
        assert_eq!(store.commit(300).unwrap(), 480);
        assert_eq!(store.load(), Some(480));
        assert_eq!(store.commit(1000).unwrap(), 1000);
        assert_eq!(store.load(), Some(1000));
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut store = MemoryStore::new();
        store.commit(480).unwrap();
        store.commit(480).unwrap();
        assert_eq!(store.load(), Some(480));
    }
}
