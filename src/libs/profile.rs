//! Student profile: identity, skills, bio, and theme flag.
//!
//! The profile starts from a built-in demo identity and becomes personal as
//! pieces are edited: skills and bio persist under their own storage keys the
//! first time they change, and the student name/school can be overridden from
//! the configuration. Until then every load shows the same seed card.

use crate::db::storage::{Storage, StorageError, DARK_MODE, USER_BIO, USER_SKILLS};
use crate::libs::config::StudentConfig;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use serde::{Deserialize, Serialize};

const DEFAULT_NAME: &str = "Gift Rametsi";
const DEFAULT_TITLE: &str = "Computer Science Student";
const DEFAULT_SCHOOL: &str = "University of South Africa";
const DEFAULT_BIO: &str =
    "Passionate student and lifelong learner. Currently focused on web development and AI technologies.";

/// Placeholder stored when a bio edit comes out empty after trimming.
pub const NO_BIO: &str = "No bio yet";

/// One skill with a 0..=100 proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

impl Skill {
    /// Levels above 100 are clamped; the lower bound is the type's.
    pub fn new(name: &str, level: u8) -> Self {
        Skill {
            name: name.to_string(),
            level: level.min(100),
        }
    }
}

/// The demo skill set shown until the user edits skills.
pub fn seed_skills() -> Vec<Skill> {
    vec![
        Skill::new("JavaScript", 85),
        Skill::new("Python", 75),
        Skill::new("Data Structures", 80),
        Skill::new("HTML/CSS", 90),
    ]
}

/// Profile state backed by the key-value store.
pub struct Profile {
    storage: Storage,
    pub name: String,
    pub title: String,
    pub school: String,
    pub bio: String,
    pub skills: Vec<Skill>,
    pub dark_mode: bool,
    pub followers: u32,
    pub following: u32,
}

impl Profile {
    /// Loads the profile, overlaying stored edits on the seed identity.
    ///
    /// Malformed stored skills fail closed to the seed set with a warning;
    /// absent keys mean the matching piece was never edited.
    pub fn load(storage: Storage) -> Result<Self> {
        let bio = match storage.get(USER_BIO)? {
            Some(bio) => bio,
            None => DEFAULT_BIO.to_string(),
        };
        let skills = match storage.get_json::<Vec<Skill>>(USER_SKILLS) {
            Ok(Some(skills)) => skills,
            Ok(None) => seed_skills(),
            Err(StorageError::MalformedJson { .. }) => {
                msg_warning!(Message::StoredSkillsUnreadable);
                seed_skills()
            }
            Err(e) => return Err(e.into()),
        };
        // The flag is stored as text; anything but "true" counts as light mode
        let dark_mode = matches!(storage.get(DARK_MODE)?.as_deref(), Some("true"));

        Ok(Profile {
            storage,
            name: DEFAULT_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            school: DEFAULT_SCHOOL.to_string(),
            bio,
            skills,
            dark_mode,
            followers: 127,
            following: 84,
        })
    }

    /// Overrides name and school from the configuration; empty fields keep
    /// the current value.
    pub fn apply_student(&mut self, student: &StudentConfig) {
        if !student.name.trim().is_empty() {
            self.name = student.name.trim().to_string();
        }
        if !student.school.trim().is_empty() {
            self.school = student.school.trim().to_string();
        }
    }

    /// Sets the bio, trimming whitespace; an empty result becomes [`NO_BIO`].
    pub fn set_bio(&mut self, bio: &str) -> Result<()> {
        let bio = bio.trim();
        self.bio = if bio.is_empty() {
            NO_BIO.to_string()
        } else {
            bio.to_string()
        };
        self.storage.set(USER_BIO, &self.bio)?;

        Ok(())
    }

    /// Sets a skill's level, clamped to 100, adding the skill when new.
    ///
    /// Returns the level actually applied so the caller can report it.
    pub fn set_skill(&mut self, name: &str, level: u8) -> Result<u8> {
        let level = level.min(100);
        match self.skills.iter_mut().find(|skill| skill.name == name) {
            Some(skill) => skill.level = level,
            None => self.skills.push(Skill::new(name, level)),
        }
        self.storage.set_json(USER_SKILLS, &self.skills)?;

        Ok(level)
    }

    /// Persists the dark-mode flag.
    pub fn set_theme(&mut self, dark: bool) -> Result<()> {
        self.dark_mode = dark;
        self.storage.set(DARK_MODE, if dark { "true" } else { "false" })?;

        Ok(())
    }
}
