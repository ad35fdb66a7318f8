//! Core library modules for the studymate application.
//!
//! Serves as the main entry point for all studymate library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Study Tracking**: Task records, the tracker state, progress snapshots
//! - **Learning Features**: Quiz engine, activity history, achievements
//! - **Social Features**: Profile management, the community feed
//! - **User Interface**: Console rendering, pagination, data export,
//!   formatting
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studymate::db::storage::Storage;
//! use studymate::libs::tracker::StudyTracker;
//!
//! let mut tracker = StudyTracker::load(Storage::new()?)?;
//! tracker.schedule("Read Ch.3", "2024-05-01", "14:00")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod achievements;
pub mod activity;
pub mod config;
pub mod data_storage;
pub mod export;
pub mod feed;
pub mod formatter;
pub mod messages;
pub mod paging;
pub mod profile;
pub mod quiz;
pub mod task;
pub mod tracker;
pub mod view;
