pub mod key;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};
use std::{fs, path::Path};

use self::key::Key;

/// String keyed store. Every value is one JSON document.
pub struct Database {
    connection: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Database> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("While creating directory {}", dir.display()))?;
        }
        let connection = Connection::open(path)
            .with_context(|| format!("While opening database at {}", path.display()))?;
        Database::from_connection(connection)
    }

    pub fn in_memory() -> Result<Database> {
        Database::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(connection: Connection) -> Result<Database> {
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS store (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
                params![],
            )
            .context("While creating store table")?;
        Ok(Database { connection })
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(
                "SELECT value FROM store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .context("While reading from store")
    }

    pub fn set_raw(&self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(
                "INSERT INTO store (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .with_context(|| format!("While writing {}", key))
            .map(|_| ())
    }

    /// Stored value for `key`, or `default` if it is missing or unreadable.
    pub fn load<T: DeserializeOwned>(&self, key: Key, default: T) -> T {
        let name = key.to_string();
        let raw = match self.get_raw(&name) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                log::warn!("Could not read {}, using defaults: {:#}", name, err);
                return default;
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::warn!("Stored value for {} is corrupt, using defaults: {}", name, err);
            default
        })
    }

    pub fn save<T: Serialize>(&self, key: Key, value: &T) -> Result<()> {
        let name = key.to_string();
        let raw = serde_json::to_string(value)
            .with_context(|| format!("While serializing {}", name))?;
        self.set_raw(&name, &raw)?;
        log::debug!("Saved {}", name);
        Ok(())
    }
}
