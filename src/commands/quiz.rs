//! Quiz command: interactive sessions, history review, and history export.
//!
//! A session asks each prepared question once through a terminal select
//! prompt and scores one point per correct answer. The finished result is
//! appended to the stored history and bumps the shared quizzes-taken
//! counter, the same counter task completion advances.

use crate::{
    db::storage::Storage,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        quiz::{self, QuizResult, QuizStore},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Select};
use std::path::PathBuf;

/// Command-line arguments for the quiz command.
#[derive(Debug, Args)]
pub struct QuizArgs {
    /// Show past results instead of starting a session
    #[arg(long)]
    history: bool,

    /// Questions for this session, 0 for the whole bank (overrides config)
    #[arg(short, long)]
    length: Option<usize>,

    /// Export the stored history instead of starting a session
    #[arg(long)]
    export: bool,

    /// Output format for --export
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file for --export; defaults to a timestamped name
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Executes the quiz command.
///
/// `--export` and `--history` read the stored history; without either flag
/// an interactive session runs.
pub fn cmd(args: QuizArgs) -> Result<()> {
    let mut store = QuizStore::new(Storage::new()?);

    if args.export {
        let history = store.history()?;
        return Exporter::new(args.format, "quiz_history", args.output).export_quiz_history(&history);
    }

    if args.history {
        let history = store.history()?;
        if history.is_empty() {
            msg_info!(Message::QuizHistoryEmpty);
            return Ok(());
        }
        msg_print!(Message::QuizHistoryHeader, true);
        return View::quiz_history(&history);
    }

    run_session(&mut store, args.length)
}

/// Runs one interactive session and records the result.
fn run_session(store: &mut QuizStore, length: Option<usize>) -> Result<()> {
    let quiz_config = Config::read()?.quiz.unwrap_or_default();

    let bank = quiz::load_bank(quiz_config.questions_file.as_deref());
    let limit = length.unwrap_or(quiz_config.question_limit);
    let questions = quiz::prepare_session(bank, limit);

    msg_print!(Message::QuizHeader, true);

    let mut score = 0;
    for question in &questions {
        let answers: Vec<&str> = question.answers.iter().map(|answer| answer.text.as_str()).collect();

        let picked = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(&question.question)
            .items(&answers)
            .default(0)
            .interact()?;

        // Prepared questions always carry exactly one correct answer
        if let Some(correct) = question.correct_index() {
            if picked == correct {
                score += 1;
                msg_success!(Message::QuizAnswerCorrect);
            } else {
                msg_error!(Message::QuizAnswerWrong(question.answers[correct].text.clone()));
            }
        }
    }

    let result = QuizResult::new(score, questions.len());
    store.record(&result)?;

    msg_print!(Message::QuizFinished(result.score, result.total_questions), true);
    Ok(())
}
