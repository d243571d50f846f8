//! SQLite-backed key-value store.
//!
//! The default backend for the CLI: a single `kv` table at
//! `~/.config/urgenda/planner.db`, one row per key.

use rusqlite::{params, Connection};
use std::path::Path;

use super::{data_dir, KvStore};
use crate::error::StoreError;

pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `~/.config/urgenda/planner.db`, creating the file
    /// and schema as needed.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()?.join("planner.db");
        Self::open_at(&path)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl KvStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_round_trip() {
        let mut store = SqliteStore::open_memory().unwrap();
        assert!(store.get("tasks").unwrap().is_none());

        store.set("tasks", "[]").unwrap();
        store.set("tasks", r#"[{"name":"a"}]"#).unwrap();
        assert_eq!(
            store.get("tasks").unwrap().as_deref(),
            Some(r#"[{"name":"a"}]"#)
        );
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("planner.db");

        {
            let mut store = SqliteStore::open_at(&path).unwrap();
            store.set("completed", r#"["essay"]"#).unwrap();
        }

        let store = SqliteStore::open_at(&path).unwrap();
        assert_eq!(
            store.get("completed").unwrap().as_deref(),
            Some(r#"["essay"]"#)
        );
    }
}
