//! Task completion command.
//!
//! Completes tasks either by explicit id or through an interactive
//! multi-select over the active collection. Completion removes the task and
//! advances the study-hour and quizzes-taken counters; completing an id that
//! is not in the collection is a notice, not an error.

use crate::{
    db::storage::Storage,
    libs::{messages::Message, tracker::StudyTracker},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, MultiSelect};

/// Command-line arguments for the done command.
#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Id of the task to complete; omit to pick interactively
    id: Option<i64>,
}

/// Executes the done command.
pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tracker = StudyTracker::load(Storage::new()?)?;

    match args.id {
        Some(id) => complete_one(&mut tracker, id),
        None => complete_interactive(&mut tracker),
    }
}

/// Completes a single task by id, reporting the outcome either way.
fn complete_one(tracker: &mut StudyTracker, id: i64) -> Result<()> {
    // Name has to be captured before completion removes the task
    let name = tracker.snapshot().tasks.iter().find(|task| task.id == id).map(|task| task.name.clone());

    match (tracker.complete(id)?, name) {
        (true, Some(name)) => msg_success!(Message::TaskCompleted(name)),
        _ => msg_info!(Message::TaskNotFoundWithId(id)),
    }
    Ok(())
}

/// Presents a multi-select over the active collection and completes the
/// chosen tasks.
fn complete_interactive(tracker: &mut StudyTracker) -> Result<()> {
    let tasks = tracker.snapshot().tasks;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksScheduled);
        return Ok(());
    }

    let items: Vec<String> = tasks.iter().map(|task| format!("{} ({} {})", task.name, task.date, task.time)).collect();

    let selections = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTasksToComplete.to_string())
        .items(&items)
        .interact()?;

    if selections.is_empty() {
        msg_info!(Message::NoTasksSelected);
        return Ok(());
    }

    for index in selections {
        let task = &tasks[index];
        if tracker.complete(task.id)? {
            msg_success!(Message::TaskCompleted(task.name.clone()));
        }
    }
    Ok(())
}
