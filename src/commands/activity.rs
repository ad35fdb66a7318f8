//! Activity history command with filtering, pagination, and export.
//!
//! The history merges stored quiz results into the demo activity records,
//! newest first. Listing is paginated with the configured page size; export
//! writes the same filtered set as CSV or JSON.

use crate::{
    db::storage::Storage,
    libs::{
        activity,
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        paging::Page,
        quiz::QuizStore,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the activity command.
#[derive(Debug, Args)]
pub struct ActivityArgs {
    /// Kind to show: all, quiz, study, or note
    #[arg(long, default_value = "all")]
    filter: String,

    /// Page of results to show
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Export the filtered history instead of listing it
    #[arg(long)]
    export: bool,

    /// Output format for --export
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file for --export; defaults to a timestamped name
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Executes the activity command.
pub fn cmd(args: ActivityArgs) -> Result<()> {
    let store = QuizStore::new(Storage::new()?);
    let history = activity::assemble_history(&store.history()?);
    let filtered = activity::filter_by_kind(history, &args.filter);

    if args.export {
        return Exporter::new(args.format, "activity", args.output).export_activities(&filtered);
    }

    msg_print!(Message::ActivityHeader, true);

    let page = Page::compute(filtered.len(), Config::read()?.page_size(), args.page);
    if filtered.is_empty() {
        msg_info!(Message::ActivityEmpty);
    } else {
        View::activities(page.slice(&filtered))?;
    }
    msg_print!(Message::PageInfo(page.number, page.total_pages));
    Ok(())
}
