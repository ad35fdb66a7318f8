//! Display implementation for studymate application messages.
//!
//! Provides the `Display` trait implementation for the `Message` enum, turning
//! structured message data into human-readable text for terminal output. All
//! user-facing text lives here, in one place, so wording stays consistent and
//! parameters are interpolated type-safely.
//!
//! ## Message Categories
//!
//! - **Task Messages**: Scheduling and completing study tasks
//! - **Progress Messages**: Tracker summaries and storage recovery warnings
//! - **Quiz Messages**: Session feedback, history, and question-file loading
//! - **Profile Messages**: Bio, skills, and theme updates
//! - **Activity Messages**: History listing and pagination
//! - **Feed Messages**: Post creation, likes, and filtering
//! - **Achievements Messages**: Section headers for the achievements view
//! - **Configuration Messages**: Setup wizard prompts and confirmations
//! - **Export Messages**: Export completion notices

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskScheduled(name) => format!("Task '{}' scheduled successfully", name),
            Message::TaskCompleted(name) => format!("Task '{}' completed successfully", name),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TasksHeader => "Scheduled tasks:".to_string(),
            Message::NoTasksScheduled => "No tasks scheduled yet.".to_string(),
            Message::NoTasksSelected => "No tasks selected.".to_string(),
            Message::SelectTasksToComplete => "Select tasks to complete (space to select, enter to confirm)".to_string(),
            Message::TaskFieldsRequired => "Task name, date and time must not be empty".to_string(),

            // === PROGRESS MESSAGES ===
            Message::ProgressHeader => "📈 Study progress".to_string(),
            Message::StoredTasksUnreadable => "Stored task list is unreadable, starting with an empty list".to_string(),
            Message::StoredCounterUnreadable(key) => format!("Stored value for '{}' is not a number, resetting to 0", key),

            // === QUIZ MESSAGES ===
            Message::QuizHeader => "🧠 Quiz time!".to_string(),
            Message::QuizAnswerCorrect => "Correct!".to_string(),
            Message::QuizAnswerWrong(answer) => format!("Wrong! The correct answer is: {}", answer),
            Message::QuizFinished(score, total) => format!("You scored {} out of {}!", score, total),
            Message::QuizHistoryHeader => "Quiz history:".to_string(),
            Message::QuizHistoryEmpty => "No quizzes taken yet.".to_string(),
            Message::QuizFileUnreadable(path) => format!("Could not read question file '{}', using the built-in questions", path),
            Message::QuizFileEmpty(path) => format!("Question file '{}' contains no usable questions, using the built-in questions", path),
            Message::QuizEntrySkipped(index) => format!("Skipping malformed question entry #{}", index),
            Message::StoredQuizHistoryUnreadable => "Stored quiz history is unreadable, starting with an empty history".to_string(),

            // === PROFILE MESSAGES ===
            Message::BioUpdated => "Bio updated successfully".to_string(),
            Message::SkillUpdated(name, level) => format!("Skill '{}' set to {}%", name, level),
            Message::SkillLevelRequired => "A skill level is required, pass it with --level".to_string(),
            Message::ThemeUpdated(theme) => format!("Theme set to {}", theme),
            Message::StoredSkillsUnreadable => "Stored skills are unreadable, using the default skill set".to_string(),

            // === ACTIVITY MESSAGES ===
            Message::ActivityHeader => "Activity history".to_string(),
            Message::ActivityEmpty => "No activities recorded for this filter.".to_string(),
            Message::PageInfo(page, total) => format!("Page {} of {}", page, total),

            // === FEED MESSAGES ===
            Message::FeedHeader => "Study feed".to_string(),
            Message::FeedEmpty => "No posts match this filter.".to_string(),
            Message::PostAdded => "Post added to the feed".to_string(),
            Message::PostTextRequired => "Post text must not be empty".to_string(),
            Message::PostNotFoundWithId(id) => format!("Post with ID {} not found.", id),
            Message::PostLiked(author) => format!("You liked {}'s post", author),
            Message::PostUnliked(author) => format!("Like removed from {}'s post", author),

            // === ACHIEVEMENTS MESSAGES ===
            Message::AchievementsHeader => "🏆 Achievements".to_string(),
            Message::BadgesHeader => "Badges:".to_string(),
            Message::MilestonesHeader => "Milestones:".to_string(),
            Message::LeaderboardHeader => "Leaderboard:".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigRemoved => "Configuration removed".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleStudent => "Student profile settings".to_string(),
            Message::ConfigModuleQuiz => "Quiz settings".to_string(),
            Message::ConfigModuleView => "Display settings".to_string(),
            Message::PromptStudentName => "Display name".to_string(),
            Message::PromptStudentSchool => "School or university".to_string(),
            Message::PromptQuizFile => "Path to a JSON question file (leave empty for built-in questions)".to_string(),
            Message::PromptQuizLength => "Questions per quiz session (0 for all)".to_string(),
            Message::PromptPageSize => "Items per page in listings".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported successfully to: {}", path),
        };
        write!(f, "{}", text)
    }
}
