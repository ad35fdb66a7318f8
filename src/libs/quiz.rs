//! Quiz engine: question bank, session preparation, and stored history.
//!
//! A session takes a bank of multiple-choice questions, shuffles it, and asks
//! each question once; the presentation layer drives the actual prompting.
//! Finished sessions are recorded under the `quizHistory` key and advance the
//! shared `quizzesTaken` counter.
//!
//! ## Features
//!
//! - **Built-in Bank**: Five general-knowledge questions available offline
//! - **Custom Banks**: An optional JSON file replaces the built-in bank;
//!   individual bad entries are skipped, a useless file falls back whole
//! - **Scoring**: One point per correct answer, percentage rounded to the
//!   nearest integer
//! - **History**: Results accumulate as a JSON array across sessions

use crate::db::storage::{Storage, StorageError, QUIZZES_TAKEN, QUIZ_HISTORY};
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use chrono::Local;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fs;

/// One answer choice of a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

/// One multiple-choice question.
///
/// The serialized form matches the question-file format: an object with a
/// `question` string and an `answers` array of `{text, correct}` entries,
/// where `correct` defaults to `false` when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn new(question: &str, answers: &[(&str, bool)]) -> Self {
        Question {
            question: question.to_string(),
            answers: answers
                .iter()
                .map(|(text, correct)| Answer {
                    text: text.to_string(),
                    correct: *correct,
                })
                .collect(),
        }
    }

    /// Whether a session can ask this question: it has text, at least two
    /// choices, and exactly one of them is correct.
    pub fn is_askable(&self) -> bool {
        !self.question.trim().is_empty()
            && self.answers.len() >= 2
            && self.answers.iter().filter(|answer| answer.correct).count() == 1
    }

    /// Index of the correct answer within `answers`.
    pub fn correct_index(&self) -> Option<usize> {
        self.answers.iter().position(|answer| answer.correct)
    }
}

/// Outcome of a finished session, as stored in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    /// Local calendar date the session finished, ISO formatted.
    pub date: String,
    pub score: usize,
    pub total_questions: usize,
    /// `score / total_questions` rounded to the nearest whole percent.
    pub percentage: u8,
}

impl QuizResult {
    pub fn new(score: usize, total_questions: usize) -> Self {
        let percentage = if total_questions == 0 {
            0
        } else {
            ((score as f64 / total_questions as f64) * 100.0).round() as u8
        };

        QuizResult {
            date: Local::now().format("%Y-%m-%d").to_string(),
            score,
            total_questions,
            percentage,
        }
    }
}

/// The five built-in questions.
pub fn builtin_bank() -> Vec<Question> {
    vec![
        Question::new(
            "What is the capital of France?",
            &[("London", false), ("Paris", true), ("Berlin", false), ("Madrid", false)],
        ),
        Question::new(
            "Which planet is known as the Red Planet?",
            &[("Venus", false), ("Mars", true), ("Jupiter", false), ("Saturn", false)],
        ),
        Question::new(
            "What is 2 + 2?",
            &[("3", false), ("4", true), ("5", false), ("6", false)],
        ),
        Question::new(
            "Who painted the Mona Lisa?",
            &[
                ("Vincent van Gogh", false),
                ("Pablo Picasso", false),
                ("Leonardo da Vinci", true),
                ("Michelangelo", false),
            ],
        ),
        Question::new(
            "What is the largest mammal?",
            &[("Elephant", false), ("Blue Whale", true), ("Giraffe", false), ("Polar Bear", false)],
        ),
    ]
}

/// Loads the question bank, honoring an optional custom question file.
///
/// The file must contain a JSON array of questions. Entries that do not
/// parse, or parse into something unaskable, are skipped with a warning and
/// the rest of the file is still used. An unreadable file, a non-array file,
/// or a file with no usable entry falls back to the built-in bank.
pub fn load_bank(questions_file: Option<&str>) -> Vec<Question> {
    let path = match questions_file {
        Some(path) => path,
        None => return builtin_bank(),
    };

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => {
            msg_warning!(Message::QuizFileUnreadable(path.to_string()));
            return builtin_bank();
        }
    };
    let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(entries) => entries,
        Err(_) => {
            msg_warning!(Message::QuizFileUnreadable(path.to_string()));
            return builtin_bank();
        }
    };

    let mut bank = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<Question>(entry) {
            Ok(question) if question.is_askable() => bank.push(question),
            // 1-based position so the warning matches what the user sees in the file
            _ => msg_warning!(Message::QuizEntrySkipped(index + 1)),
        }
    }

    if bank.is_empty() {
        msg_warning!(Message::QuizFileEmpty(path.to_string()));
        return builtin_bank();
    }
    bank
}

/// Shuffles the bank and truncates it to the session length.
///
/// A `limit` of 0 means the whole bank. Answer order within each question is
/// left untouched.
pub fn prepare_session(mut bank: Vec<Question>, limit: usize) -> Vec<Question> {
    bank.shuffle(&mut rand::thread_rng());
    if limit > 0 && limit < bank.len() {
        bank.truncate(limit);
    }
    bank
}

/// Durable quiz history and the quiz side of the shared counter.
pub struct QuizStore {
    storage: Storage,
}

impl QuizStore {
    pub fn new(storage: Storage) -> Self {
        QuizStore { storage }
    }

    /// Returns all stored results, oldest first.
    ///
    /// Malformed stored history fails closed to an empty list with a
    /// warning, matching the tracker's load policy.
    pub fn history(&self) -> Result<Vec<QuizResult>> {
        match self.storage.get_json::<Vec<QuizResult>>(QUIZ_HISTORY) {
            Ok(history) => Ok(history.unwrap_or_default()),
            Err(StorageError::MalformedJson { .. }) => {
                msg_warning!(Message::StoredQuizHistoryUnreadable);
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Records a finished session.
    ///
    /// Appends the result to the stored history and increments the shared
    /// `quizzesTaken` counter by 1. Task completion independently increments
    /// the same key; the two writers are intentionally not unified, so the
    /// counter reads as "completions plus quiz attempts".
    pub fn record(&mut self, result: &QuizResult) -> Result<()> {
        let mut history = self.history()?;
        history.push(result.clone());
        self.storage.set_json(QUIZ_HISTORY, &history)?;

        let taken = match self.storage.get_counter(QUIZZES_TAKEN) {
            Ok(taken) => taken,
            Err(StorageError::MalformedNumber { .. }) => {
                msg_warning!(Message::StoredCounterUnreadable(QUIZZES_TAKEN.to_string()));
                0
            }
            Err(e) => return Err(e.into()),
        };
        self.storage.set_counter(QUIZZES_TAKEN, taken + 1)?;

        Ok(())
    }
}
