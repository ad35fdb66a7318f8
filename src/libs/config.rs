//! Configuration management for the studymate application.
//!
//! Handles the optional settings file that tunes presentation and quiz
//! behavior, with an interactive setup wizard for first-time configuration.
//!
//! ## Configuration Structure
//!
//! The configuration is modular; each section is optional and the
//! application works with none of them present:
//!
//! - **Student**: Display name and school shown on the profile card
//! - **Quiz**: Custom question file and per-session question limit
//! - **View**: Page size for paginated listings
//!
//! ## Storage
//!
//! The configuration is a single pretty-printed JSON file `config.json`
//! in the platform application data directory, next to the database file.
//! A missing file is not an error; it simply means defaults everywhere.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use studymate::libs::config::Config;
//!
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//! let page_size = config.page_size();
//!
//! // Run the interactive setup wizard and persist the result
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Page size used by paginated listings when no `view` section is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Represents a configurable module in the application.
///
/// Used during interactive setup to display available sections and route the
/// user's selection to the matching prompts.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Student identity settings for the profile card.
///
/// When present, these override the built-in demo identity on the profile
/// display. Either field may be left empty to keep the default.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StudentConfig {
    /// Display name shown on the profile card.
    pub name: String,

    /// School or institution line under the name.
    pub school: String,
}

/// Quiz behavior settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct QuizConfig {
    /// Path to a JSON file with custom questions.
    ///
    /// When set, the file replaces the built-in question bank for quiz
    /// sessions. Unreadable or empty files fall back to the built-in bank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions_file: Option<String>,

    /// Number of questions per session; 0 means the whole bank.
    #[serde(default)]
    pub question_limit: usize,
}

/// Presentation settings for paginated listings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Rows per page in activity history and feed listings.
    pub page_size: usize,
}

/// Main configuration container for the entire application.
///
/// Every section is optional so the configuration file stays minimal:
/// sections the user never configured are omitted from the JSON entirely via
/// `skip_serializing_if`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// Student identity override for the profile card.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentConfig>,

    /// Quiz session settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<QuizConfig>,

    /// Listing presentation settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
}

impl Default for QuizConfig {
    /// Built-in question bank, whole bank per session.
    fn default() -> Self {
        QuizConfig {
            questions_file: None,
            question_limit: 0,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Default for Config {
    /// Creates a configuration with no section configured.
    ///
    /// This is the state of a fresh installation: the profile shows the demo
    /// identity, quizzes use the built-in bank, and listings use the default
    /// page size.
    fn default() -> Self {
        Config {
            student: None,
            quiz: None,
            view: None,
        }
    }
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file yields the default configuration rather than an error,
    /// so the application runs with zero setup. A present but unparseable
    /// file is reported as an error; silently discarding a file the user
    /// edited by hand would hide their mistake.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Effective page size for paginated listings.
    ///
    /// Falls back to [`DEFAULT_PAGE_SIZE`] without a `view` section and
    /// clamps a configured 0 up to 1 to keep pagination defined.
    pub fn page_size(&self) -> usize {
        self.view
            .as_ref()
            .map(|view| view.page_size)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .max(1)
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Loads the existing configuration as defaults, presents a multi-select
    /// of the available sections, then prompts for each selected section's
    /// values. Sections not selected keep their current state. Returns the
    /// updated configuration for the caller to save.
    pub fn init() -> Result<Self> {
        // Existing values become the wizard defaults
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let node_descriptions = vec![
            ConfigModule {
                key: "student".to_string(),
                name: "Student".to_string(),
            },
            ConfigModule {
                key: "quiz".to_string(),
                name: "Quiz".to_string(),
            },
            ConfigModule {
                key: "view".to_string(),
                name: "View".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "student" => {
                    let default = config.student.clone().unwrap_or(StudentConfig {
                        name: "".to_string(),
                        school: "".to_string(),
                    });
                    msg_print!(Message::ConfigModuleStudent);
                    config.student = Some(StudentConfig {
                        name: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStudentName.to_string())
                            .default(default.name)
                            .allow_empty(true)
                            .interact_text()?,

                        school: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStudentSchool.to_string())
                            .default(default.school)
                            .allow_empty(true)
                            .interact_text()?,
                    });
                }

                "quiz" => {
                    let default = config.quiz.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleQuiz);

                    // Empty path means "use the built-in bank"
                    let questions_file: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptQuizFile.to_string())
                        .default(default.questions_file.unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;

                    config.quiz = Some(QuizConfig {
                        questions_file: match questions_file.trim() {
                            "" => None,
                            path => Some(path.to_string()),
                        },
                        question_limit: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptQuizLength.to_string())
                            .default(default.question_limit)
                            .interact_text()?,
                    });
                }

                "view" => {
                    let default = config.view.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleView);
                    config.view = Some(ViewConfig {
                        page_size: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPageSize.to_string())
                            .default(default.page_size)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
