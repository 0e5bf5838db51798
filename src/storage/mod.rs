//! Flat string key-value persistence behind the stats store.
//!
//! Implementations only move opaque strings around; parsing, defaults and
//! key naming live in [`crate::progress::StatsStore`].

mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    /// Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
