//! Key-value repository contracts and implementations.
//!
//! # Responsibility
//! - Provide get/put of JSON text under fixed string keys.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `put` replaces the whole value for a key (last write wins).
//! - Implementations never interpret the stored text; typed decoding is
//!   the widget store's job.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for key-value persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// A value could not be encoded to JSON before writing.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode value as JSON: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Repository interface for raw key-value access.
pub trait KvRepository {
    /// Returns the stored text for `key`, or `None` when absent.
    fn get(&self, key: &str) -> RepoResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&self, key: &str, value: &str) -> RepoResult<()>;
}

impl<T: KvRepository + ?Sized> KvRepository for &T {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).put(key, value)
    }
}

/// SQLite-backed key-value repository over the `kv_entries` table.
pub struct SqliteKvRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvRepository for SqliteKvRepository<'_> {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local key-value repository.
///
/// Used when the file store is unavailable and as the lightweight backend
/// for pure-logic tests. State is lost when the value is dropped.
#[derive(Debug, Default)]
pub struct InMemoryKvRepository {
    entries: RefCell<BTreeMap<String, String>>,
}

impl InMemoryKvRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvRepository for InMemoryKvRepository {
    fn get(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> RepoResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryKvRepository, KvRepository};

    #[test]
    fn in_memory_roundtrip_and_replace() {
        let repo = InMemoryKvRepository::new();
        assert_eq!(repo.get("settings").unwrap(), None);

        repo.put("settings", "{\"winterMode\":true}").unwrap();
        assert_eq!(
            repo.get("settings").unwrap().as_deref(),
            Some("{\"winterMode\":true}")
        );

        repo.put("settings", "{}").unwrap();
        assert_eq!(repo.get("settings").unwrap().as_deref(), Some("{}"));
    }
}
