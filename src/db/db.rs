//! SQLite connection bootstrap.
//!
//! Resolves the database file inside the platform data directory and opens
//! the connection that the storage layer builds on.

use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

/// Database file name inside the application data directory.
pub const DB_FILE_NAME: &str = "studymate.db";

/// An open connection to the application database.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn: Connection = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }
}
