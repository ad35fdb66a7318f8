//! Data export for activity history and quiz results.
//!
//! Produces CSV for spreadsheet use and pretty-printed JSON for
//! programmatic processing. Output goes to an explicit path or to a
//! timestamped file in the current directory.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studymate::libs::activity::seed_activities;
//! use studymate::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, "activity", None);
//! exporter.export_activities(&seed_activities())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::activity::Activity;
use crate::libs::formatter::capitalize;
use crate::libs::messages::Message;
use crate::libs::quiz::QuizResult;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    Csv,
    /// Pretty-printed JSON preserving field types.
    Json,
}

/// Export handler holding the format and resolved output path.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter for the given format.
    ///
    /// Without an explicit output path, the file lands in the current
    /// directory as `studymate_<what>_<date>_<time>.<ext>`, where `what`
    /// names the exported data ("activity", "quiz_history").
    pub fn new(format: ExportFormat, what: &str, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("studymate_{}_{}", what, Local::now().format("%Y-%m-%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Exports activity records in the configured format.
    pub fn export_activities(&self, activities: &[Activity]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_activities_csv(activities)?,
            ExportFormat::Json => self.write_json(&activities)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    /// Exports quiz results in the configured format.
    pub fn export_quiz_history(&self, history: &[QuizResult]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_quiz_history_csv(history)?,
            ExportFormat::Json => self.write_json(&history)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_activities_csv(&self, activities: &[Activity]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Date", "Type", "Duration", "Details"])?;

        for activity in activities {
            wtr.write_record([
                activity.date.clone(),
                capitalize(&activity.kind),
                activity.duration.clone(),
                activity.details.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_quiz_history_csv(&self, history: &[QuizResult]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Date", "Score", "Questions", "Percentage"])?;

        for result in history {
            wtr.write_record([
                result.date.clone(),
                result.score.to_string(),
                result.total_questions.to_string(),
                format!("{}%", result.percentage),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn write_json<T: Serialize>(&self, records: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
