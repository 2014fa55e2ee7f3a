//! Key-value persistence port.
//!
//! The engine persists its state as serialized JSON values under a
//! handful of well-known keys. Reads never fail: a missing or
//! undecodable value yields the caller-supplied default, so corrupt
//! storage degrades to fresh state instead of crashing.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage keys used by the engine.
pub mod keys {
    pub const DECK: &str = "deck";
    pub const XP: &str = "xp";
    pub const GOAL: &str = "goal";
    pub const STREAK: &str = "streak";

    pub const ALL: [&str; 4] = [DECK, XP, GOAL, STREAK];
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Opaque key-value persistence capability.
pub trait KeyValueStore: Send + Sync {
    /// Raw JSON text stored at `key`, if present and readable.
    fn get_raw(&self, key: &str) -> Option<String>;

    fn set_raw(&self, key: &str, value: &str) -> Result<()>;

    fn remove(&self, key: &str) -> Result<()>;
}

/// Open the on-disk store at its default location, falling back to a
/// transient in-memory store when the database cannot be opened. The
/// session keeps working either way.
pub fn open_default() -> Arc<dyn KeyValueStore> {
    match SqliteStore::open(&SqliteStore::default_path()) {
        Ok(store) => Arc::new(store),
        Err(err) => {
            tracing::warn!(%err, "storage unavailable, falling back to in-memory state");
            Arc::new(MemoryStore::new())
        }
    }
}

impl dyn KeyValueStore {
    /// Decode the value at `key`, falling back to `default` when the
    /// key is missing or the stored text does not decode.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get_raw(key) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                tracing::warn!(key, %err, "stored value is unreadable, using default");
                default
            }),
            None => default,
        }
    }

    /// Serialize and store a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set_raw(key, &raw)
    }
}
