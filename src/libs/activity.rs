//! Activity history: demo records merged with stored quiz results.
//!
//! The history starts from seven fixed demo records and grows as quizzes are
//! taken: every stored quiz result shows up as a quiz activity. Records are
//! plain display data; filtering and pagination happen over copies and the
//! assembled history is rebuilt on every load.

use crate::libs::quiz::QuizResult;
use serde::{Deserialize, Serialize};

/// One history record. `duration` is free text ("2 hrs", "-") as the demo
/// data shipped it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub date: String,
    pub kind: String,
    pub duration: String,
    pub details: String,
}

impl Activity {
    pub fn new(date: &str, kind: &str, duration: &str, details: &str) -> Self {
        Activity {
            date: date.to_string(),
            kind: kind.to_string(),
            duration: duration.to_string(),
            details: details.to_string(),
        }
    }
}

/// The seeded demo records, newest first. Kinds are `quiz`, `study`, `note`.
pub fn seed_activities() -> Vec<Activity> {
    vec![
        Activity::new("2023-06-15", "quiz", "25 mins", "Advanced JavaScript (Score: 92%)"),
        Activity::new("2023-06-14", "study", "2 hrs", "Data Structures algorithms"),
        Activity::new("2023-06-12", "note", "-", "Chemistry 101 Chapter 4"),
        Activity::new("2023-06-10", "quiz", "18 mins", "Web Development Basics (Score: 88%)"),
        Activity::new("2023-06-08", "study", "1.5 hrs", "Database Design"),
        Activity::new("2023-06-05", "note", "-", "Physics Equations Summary"),
        Activity::new("2023-06-03", "quiz", "30 mins", "Python Fundamentals (Score: 95%)"),
    ]
}

/// Assembles the full history: stored quiz results become quiz activities,
/// merged with the seeded records and ordered newest first.
///
/// Dates are ISO strings, so ordering is a plain descending string sort; the
/// sort is stable, which keeps same-day results in their stored order.
pub fn assemble_history(quiz_history: &[QuizResult]) -> Vec<Activity> {
    let mut history: Vec<Activity> = quiz_history
        .iter()
        .map(|result| {
            Activity::new(
                &result.date,
                "quiz",
                "-",
                &format!("General Knowledge (Score: {}%)", result.percentage),
            )
        })
        .collect();
    history.extend(seed_activities());
    history.sort_by(|a, b| b.date.cmp(&a.date));
    history
}

/// Keeps records of the given kind; `"all"` keeps everything.
///
/// An unknown kind simply matches nothing, which renders as an empty page
/// rather than an error.
pub fn filter_by_kind(mut activities: Vec<Activity>, kind: &str) -> Vec<Activity> {
    if kind != "all" {
        activities.retain(|activity| activity.kind == kind);
    }
    activities
}
