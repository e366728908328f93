use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use super::KeyValueStore;
use crate::error::FarmError;

/// Key-value store in a single SQLite table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FarmError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "opening sqlite store");
        Self::init(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, FarmError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, FarmError> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>, FarmError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let keys = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, FarmError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), FarmError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), FarmError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn write_batch(&mut self, batch: &[(&str, Option<&str>)]) -> Result<(), FarmError> {
        let tx = self.conn.transaction()?;
        for &(key, value) in batch {
            match value {
                Some(value) => tx.execute(
                    "INSERT INTO kv (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    params![key, value],
                )?,
                None => tx.execute("DELETE FROM kv WHERE key = ?1", params![key])?,
            };
        }
        tx.commit()?;
        debug!(writes = batch.len(), "sqlite batch committed");
        Ok(())
    }
}
