use super::db::Db;
use crate::libs::store::{Store, StoreError};
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA_STORAGE: &str = "CREATE TABLE IF NOT EXISTS storage (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
);";
const SELECT_VALUE: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_VALUE: &str = "INSERT INTO storage (key, value) VALUES (?1, ?2) ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// [`Store`] backed by a single key/value table in `tasktime.db`.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new() -> Result<SqliteStore, StoreError> {
        Self::from_db(Db::new()?)
    }

    pub fn from_db(db: Db) -> Result<SqliteStore, StoreError> {
        db.conn.execute(SCHEMA_STORAGE, [])?;
        Ok(SqliteStore { conn: db.conn })
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self.conn.query_row(SELECT_VALUE, [key], |row| row.get(0)).optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_overwrites_existing_slot() {
        let mut store = SqliteStore::from_db(Db::open_in_memory().unwrap()).unwrap();
        assert_eq!(store.get("title").unwrap(), None);

        store.set("title", "First").unwrap();
        store.set("title", "Second").unwrap();
        assert_eq!(store.get("title").unwrap().as_deref(), Some("Second"));

        let count: i64 = store.conn.query_row("SELECT COUNT(*) FROM storage", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }
}
