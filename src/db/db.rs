use crate::libs::data_storage::DataStorage;
use crate::libs::store::StoreError;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "tasktime.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database in the user's data directory.
    pub fn new() -> Result<Db, StoreError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(&db_file_path)
    }

    pub fn open(path: &Path) -> Result<Db, StoreError> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }
}
