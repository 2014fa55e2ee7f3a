//! SQLite-backed key-value store.

use super::{KeyValueStore, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key-value store over a single SQLite table.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        Self::init(Connection::open(path)?)
    }

    /// In-memory database; used by tests and as the fallback when the
    /// on-disk database cannot be opened.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Default database location under the platform data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sprachcoach")
            .join("sprachcoach.db")
    }
}

impl KeyValueStore for SqliteStore {
    fn get_raw(&self, key: &str) -> Option<String> {
        let conn = self.conn.lock().expect("store lock");
        conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key],
            |row| row.get(0),
        )
        .optional()
        .unwrap_or_else(|err| {
            tracing::warn!(key, %err, "store read failed");
            None
        })
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().expect("store lock");
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().expect("store lock");
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get_raw("k"), None);

        store.set_raw("k", "\"v\"").unwrap();
        assert_eq!(store.get_raw("k"), Some("\"v\"".to_string()));

        store.set_raw("k", "\"v2\"").unwrap();
        assert_eq!(store.get_raw("k"), Some("\"v2\"".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get_raw("k"), None);
    }

    #[test]
    fn keys_are_independent() {
        let store = SqliteStore::open_in_memory().unwrap();
        store.set_raw("a", "1").unwrap();
        store.set_raw("b", "2").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get_raw("b"), Some("2".to_string()));
    }
}
