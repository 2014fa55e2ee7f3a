//! In-memory store: test double and unavailable-storage fallback.

use super::{KeyValueStore, Result};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.lock().expect("store lock").get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .expect("store lock")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().expect("store lock").remove(key);
        Ok(())
    }
}
