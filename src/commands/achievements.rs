//! Achievements overview command.

use crate::{
    db::storage::Storage,
    libs::{achievements::Achievements, messages::Message, tracker::StudyTracker, view::View},
    msg_print,
};
use anyhow::Result;

/// Renders the level card, badges, milestones, and leaderboard.
///
/// Milestone progress is derived from the live tracker counters.
pub fn cmd() -> Result<()> {
    let tracker = StudyTracker::load(Storage::new()?)?;
    let achievements = Achievements::assemble(&tracker.snapshot());

    msg_print!(Message::AchievementsHeader, true);
    View::level_card(&achievements.card)?;

    msg_print!(Message::BadgesHeader, true);
    View::badges(&achievements.badges)?;

    msg_print!(Message::MilestonesHeader, true);
    View::milestones(&achievements.milestones)?;

    msg_print!(Message::LeaderboardHeader, true);
    View::leaderboard(&achievements.leaderboard)?;
    Ok(())
}
