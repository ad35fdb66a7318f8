//! Study progress summary command.

use crate::{
    db::storage::Storage,
    libs::{messages::Message, tracker::StudyTracker, view::View},
    msg_print,
};
use anyhow::Result;

/// Renders the progress summary: scheduled task count and both counters.
pub fn cmd() -> Result<()> {
    let tracker = StudyTracker::load(Storage::new()?)?;

    msg_print!(Message::ProgressHeader, true);
    View::progress(&tracker.snapshot())?;
    Ok(())
}
