//! # StudyMate - Study Planning and Progress Tracking
//!
//! A command-line study companion for scheduling tasks, taking quizzes,
//! and keeping track of learning progress.
//!
//! ## Features
//!
//! - **Task Scheduling**: Plan study sessions and mark them done
//! - **Progress Tracking**: Accumulated study hours and quiz counters
//! - **Quiz Engine**: Built-in or custom question banks with stored history
//! - **Profile**: Skills, bio, and theme, persisted across runs
//! - **Activity History**: Filterable, paginated, exportable records
//! - **Study Feed**: Demo community posts with filtering and likes
//! - **Achievements**: Badges, milestones with live progress, leaderboard
//! - **Data Export**: CSV and JSON output for history data
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studymate::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
