//! Study task tracking with durable state.
//!
//! The tracker owns the active task collection and the two progress counters,
//! and is the only writer of their storage keys during normal task work. It is
//! constructed once per command by loading stored state, mutated in memory,
//! and flushed back after every mutation.
//!
//! ## Features
//!
//! - **Scheduling**: Append new tasks in insertion order with unique ids
//! - **Completion**: Remove tasks and advance both progress counters
//! - **Snapshots**: Point-in-time copies of the state for rendering
//! - **Recovery**: Unreadable stored state degrades to defaults with a warning
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studymate::db::storage::Storage;
//! use studymate::libs::tracker::StudyTracker;
//!
//! let mut tracker = StudyTracker::load(Storage::new()?)?;
//! let task = tracker.schedule("Read Ch.3", "2024-05-01", "14:00")?;
//! tracker.complete(task.id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::storage::{Storage, StorageError, QUIZZES_TAKEN, STUDY_HOURS, STUDY_TASKS};
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::Local;

/// Point-in-time copy of tracker state for the presentation layer.
///
/// Mutating a snapshot has no effect on the tracker or on stored state.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Active tasks in insertion order, which is also the display order.
    pub tasks: Vec<Task>,
    pub study_hours: u64,
    pub quizzes_taken: u64,
}

/// The task store: active collection plus progress counters.
pub struct StudyTracker {
    storage: Storage,
    tasks: Vec<Task>,
    study_hours: u64,
    quizzes_taken: u64,
}

impl StudyTracker {
    /// Loads tracker state from storage.
    ///
    /// Absent keys default to an empty collection and zero counters. Present
    /// but unreadable content fails closed the same way, with a warning, so a
    /// corrupted store never prevents startup. Database faults propagate.
    pub fn load(storage: Storage) -> Result<Self> {
        let tasks = match storage.get_json::<Vec<Task>>(STUDY_TASKS) {
            Ok(tasks) => tasks.unwrap_or_default(),
            Err(StorageError::MalformedJson { .. }) => {
                msg_warning!(Message::StoredTasksUnreadable);
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        let study_hours = Self::load_counter(&storage, STUDY_HOURS)?;
        let quizzes_taken = Self::load_counter(&storage, QUIZZES_TAKEN)?;

        Ok(StudyTracker {
            storage,
            tasks,
            study_hours,
            quizzes_taken,
        })
    }

    /// Creates a task and appends it to the active collection.
    ///
    /// Inputs are stored verbatim; rejecting empty strings is the caller's
    /// job. The new task gets a fresh unique id and `completed = false`, and
    /// the state is flushed before returning.
    pub fn schedule(&mut self, name: &str, date: &str, time: &str) -> Result<Task> {
        let task = Task::new(self.next_id(), name, date, time);
        self.tasks.push(task.clone());
        self.flush()?;

        Ok(task)
    }

    /// Completes the task with the given id.
    ///
    /// On success the task is removed from the collection, both counters
    /// advance by 1, and the state is flushed. An unknown id is a silent
    /// no-op returning `false`; duplicate completion attempts are expected
    /// and tolerated.
    pub fn complete(&mut self, id: i64) -> Result<bool> {
        let index = match self.tasks.iter().position(|task| task.id == id) {
            Some(index) => index,
            None => return Ok(false),
        };
        self.tasks.remove(index);
        self.study_hours += 1;
        self.quizzes_taken += 1;
        self.flush()?;

        Ok(true)
    }

    /// Returns a copy of the current state. No side effects.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            study_hours: self.study_hours,
            quizzes_taken: self.quizzes_taken,
        }
    }

    /// Next task id: current epoch milliseconds, bumped past the highest
    /// existing id so that two schedules in the same millisecond still get
    /// distinct ids.
    fn next_id(&self) -> i64 {
        let now = Local::now().timestamp_millis();
        match self.tasks.iter().map(|task| task.id).max() {
            Some(max_id) => now.max(max_id + 1),
            None => now,
        }
    }

    /// Writes the collection and both counters to storage.
    ///
    /// Three independent single-key writes, each atomic on its own; there is
    /// no transaction spanning them, so a crash in between leaves the keys
    /// mutually inconsistent. Accepted limitation of the single-writer,
    /// synchronous design.
    fn flush(&mut self) -> Result<()> {
        msg_debug!(format!("flushing {} tasks, {} hours, {} quizzes", self.tasks.len(), self.study_hours, self.quizzes_taken));
        self.storage.set_json(STUDY_TASKS, &self.tasks)?;
        self.storage.set_counter(STUDY_HOURS, self.study_hours)?;
        self.storage.set_counter(QUIZZES_TAKEN, self.quizzes_taken)?;

        Ok(())
    }

    fn load_counter(storage: &Storage, key: &str) -> Result<u64> {
        match storage.get_counter(key) {
            Ok(value) => Ok(value),
            Err(StorageError::MalformedNumber { .. }) => {
                msg_warning!(Message::StoredCounterUnreadable(key.to_string()));
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }
}
