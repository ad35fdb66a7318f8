//! Key-value persistence for tracker state and profile data.
//!
//! All durable application state lives in a single `storage` table of
//! independently written string keys, mirroring the flat key-value namespace
//! the data model was designed around. Structured values (task lists, quiz
//! history, skills) are stored as JSON text; counters are stored as decimal
//! text.
//!
//! ## Features
//!
//! - **String Values**: Plain get/set/remove on string keys
//! - **JSON Values**: Typed accessors for serde-serializable values
//! - **Counters**: Decimal-text accessors for monotonic counters
//! - **Typed Errors**: Malformed content is distinguished from database
//!   faults so callers can fail closed on the former
//!
//! ## Consistency
//!
//! Each write is a single upsert and therefore atomic on its own. There is
//! deliberately no transaction spanning multiple keys; callers that write
//! several keys in a row accept that a crash between writes leaves the keys
//! mutually inconsistent. See [`crate::libs::tracker`] for where this matters.

use super::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Key holding the active task collection as a JSON array.
pub const STUDY_TASKS: &str = "studyTasks";

/// Key holding the accumulated study hours counter as decimal text.
pub const STUDY_HOURS: &str = "studyHours";

/// Key holding the quiz/completion counter as decimal text.
///
/// Two features write this key: completing a study task increments it, and
/// finishing a quiz increments it as well. The writers are independent and
/// intentionally not unified; the counter means "completions plus quiz
/// attempts", which is what the progress summary reports.
pub const QUIZZES_TAKEN: &str = "quizzesTaken";

/// Key holding past quiz results as a JSON array.
pub const QUIZ_HISTORY: &str = "quizHistory";

/// Key holding the skill list as a JSON array.
pub const USER_SKILLS: &str = "userSkills";

/// Key holding the profile bio as plain text.
pub const USER_BIO: &str = "userBio";

/// Key holding the dark-mode flag as the text `"true"` or `"false"`.
pub const DARK_MODE: &str = "darkMode";

/// SQL schema for the key-value table.
const SCHEMA_STORAGE: &str = "CREATE TABLE IF NOT EXISTS storage (
    key TEXT NOT NULL PRIMARY KEY,
    value TEXT NOT NULL
)";

/// Insert a value or overwrite the existing one for the key.
const UPSERT_VALUE: &str = "INSERT INTO storage (key, value) VALUES (?1, ?2)
    ON CONFLICT(key) DO UPDATE SET value = excluded.value";

const SELECT_VALUE: &str = "SELECT value FROM storage WHERE key = ?1";
const DELETE_VALUE: &str = "DELETE FROM storage WHERE key = ?1";

/// Errors produced by the storage layer.
///
/// `MalformedJson` and `MalformedNumber` mean the key was present but its
/// content did not parse. Callers loading state treat those as "fail closed":
/// warn, substitute a default, continue. `Database` faults propagate.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("value under '{key}' is not valid JSON: {source}")]
    MalformedJson {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("value under '{key}' is not a number")]
    MalformedNumber { key: String },
}

/// Handle to the key-value store.
pub struct Storage {
    pub conn: Connection,
}

impl Storage {
    pub fn new() -> Result<Storage> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_STORAGE, [])?;

        Ok(Storage { conn: db.conn })
    }

    /// Returns the raw string value under `key`, or `None` when absent.
    pub fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let value = self
            .conn
            .query_row(SELECT_VALUE, params![key], |row| row.get::<_, String>(0))
            .optional()?;

        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(UPSERT_VALUE, params![key, value])?;

        Ok(())
    }

    /// Removes `key`, returning how many rows were deleted (0 or 1).
    pub fn remove(&mut self, key: &str) -> Result<usize, StorageError> {
        let deleted = self.conn.execute(DELETE_VALUE, params![key])?;

        Ok(deleted)
    }

    /// Reads and deserializes the JSON value under `key`.
    ///
    /// Absent keys yield `None`; present but unparseable content yields
    /// `StorageError::MalformedJson`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get(key)? {
            Some(text) => {
                let value = serde_json::from_str(&text).map_err(|source| StorageError::MalformedJson {
                    key: key.to_string(),
                    source,
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serializes `value` to JSON and writes it under `key`.
    pub fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value).map_err(|source| StorageError::MalformedJson {
            key: key.to_string(),
            source,
        })?;
        self.set(key, &text)
    }

    /// Reads a counter stored as decimal text.
    ///
    /// An absent key counts as 0. Present but non-numeric content yields
    /// `StorageError::MalformedNumber`.
    pub fn get_counter(&self, key: &str) -> Result<u64, StorageError> {
        match self.get(key)? {
            Some(text) => text.trim().parse::<u64>().map_err(|_| StorageError::MalformedNumber { key: key.to_string() }),
            None => Ok(0),
        }
    }

    /// Writes a counter as decimal text.
    pub fn set_counter(&mut self, key: &str, value: u64) -> Result<(), StorageError> {
        self.set(key, &value.to_string())
    }
}
