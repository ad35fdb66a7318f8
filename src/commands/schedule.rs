//! Study task scheduling command.
//!
//! Creates a new entry in the active task collection. Input validation lives
//! here: the tracker itself accepts whatever it is handed, so empty fields
//! are rejected before they reach it.

use crate::{
    db::storage::Storage,
    libs::{messages::Message, tracker::StudyTracker},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the schedule command.
#[derive(Debug, Args)]
pub struct ScheduleArgs {
    /// Task name shown in listings
    #[arg(required = true)]
    name: String,

    /// Date the task is scheduled for (YYYY-MM-DD)
    #[arg(short, long)]
    date: String,

    /// Time of day for the task (e.g. 14:00)
    #[arg(short, long)]
    time: String,
}

/// Executes the schedule command.
///
/// Creates the task and persists the updated collection. Empty name, date,
/// or time are rejected with a notice; nothing is written in that case.
pub fn cmd(args: ScheduleArgs) -> Result<()> {
    let name = args.name.trim();
    let date = args.date.trim();
    let time = args.time.trim();

    if name.is_empty() || date.is_empty() || time.is_empty() {
        msg_error!(Message::TaskFieldsRequired);
        return Ok(());
    }

    let mut tracker = StudyTracker::load(Storage::new()?)?;
    let task = tracker.schedule(name, date, time)?;

    msg_success!(Message::TaskScheduled(task.name));
    Ok(())
}
