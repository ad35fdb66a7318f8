//! Database layer for the studymate application.
//!
//! Provides persistence built on SQLite. The whole application state fits a
//! flat key-value model, so the layer stays small: one module bootstraps the
//! connection, one implements the typed key-value store on top of it.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection management and schema setup
//! - **Key-Value Store**: String, JSON, and counter accessors over one table
//! - **Typed Errors**: Malformed stored content is reported distinctly from
//!   database faults so loaders can fail closed
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studymate::db::storage::{Storage, STUDY_HOURS};
//!
//! let mut storage = Storage::new()?;
//! storage.set_counter(STUDY_HOURS, 1)?;
//! assert_eq!(storage.get_counter(STUDY_HOURS)?, 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Core database connection and initialization module.
///
/// Provides the `Db` struct that opens the SQLite database file in the
/// platform data directory.
pub mod db;

/// Key-value persistence for tracker state and profile data.
///
/// Implements the storage table with string, JSON, and counter accessors
/// plus the fixed key namespace used across the application.
pub mod storage;
