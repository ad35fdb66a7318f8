//! Profile command: render the profile card or edit its stored pieces.
//!
//! Bio, skills, and theme edits persist immediately. The rendered card
//! overlays the configured student identity on the demo identity and pulls
//! live study stats from the tracker.

use crate::{
    db::storage::Storage,
    libs::{config::Config, messages::Message, profile::Profile, tracker::StudyTracker, view::View},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

/// Color scheme choices for the theme toggle.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Theme {
    Dark,
    Light,
}

/// Command-line arguments for the profile command.
#[derive(Debug, Args)]
pub struct ProfileArgs {
    /// Replace the bio text; an empty string resets it
    #[arg(short, long)]
    bio: Option<String>,

    /// Skill name to set; pass the level with --level
    #[arg(short, long)]
    skill: Option<String>,

    /// Skill level from 0 to 100, clamped on write
    #[arg(short, long)]
    level: Option<u8>,

    /// Switch the color scheme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,
}

/// Executes the profile command.
///
/// Any edit flag suppresses the card; a bare `profile` renders it.
pub fn cmd(args: ProfileArgs) -> Result<()> {
    let mut profile = Profile::load(Storage::new()?)?;
    let mut edited = false;

    if let Some(bio) = &args.bio {
        profile.set_bio(bio)?;
        msg_success!(Message::BioUpdated);
        edited = true;
    }

    if let Some(skill) = &args.skill {
        match args.level {
            Some(level) => {
                let applied = profile.set_skill(skill, level)?;
                msg_success!(Message::SkillUpdated(skill.clone(), applied));
            }
            None => msg_error!(Message::SkillLevelRequired),
        }
        edited = true;
    }

    if let Some(theme) = args.theme {
        let dark = matches!(theme, Theme::Dark);
        profile.set_theme(dark)?;
        msg_success!(Message::ThemeUpdated(if dark { "dark" } else { "light" }.to_string()));
        edited = true;
    }

    if edited {
        return Ok(());
    }

    if let Some(student) = &Config::read()?.student {
        profile.apply_student(student);
    }

    let tracker = StudyTracker::load(Storage::new()?)?;
    View::profile(&profile, &tracker.snapshot())
}
