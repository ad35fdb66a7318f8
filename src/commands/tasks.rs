//! Scheduled task listing command.

use crate::{
    db::storage::Storage,
    libs::{messages::Message, tracker::StudyTracker, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

/// Renders the active task collection in insertion order.
pub fn cmd() -> Result<()> {
    let tracker = StudyTracker::load(Storage::new()?)?;
    let snapshot = tracker.snapshot();

    if snapshot.tasks.is_empty() {
        msg_info!(Message::NoTasksScheduled);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&snapshot.tasks)?;
    Ok(())
}
