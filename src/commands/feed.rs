//! Study feed command.
//!
//! The feed lives in memory for the duration of the process, seeded with
//! demo posts. Posting and liking mutate this process's feed before the
//! listing renders, so a `--post` or `--like` shows its effect immediately.

use crate::{
    libs::{
        config::Config,
        feed::{Feed, FeedSort},
        messages::Message,
        paging::Page,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the feed command.
#[derive(Debug, Args)]
pub struct FeedArgs {
    /// Kind to show: all, achievement, notes, question, or post
    #[arg(long, default_value = "all")]
    filter: String,

    /// Ordering of the listing
    #[arg(short, long, value_enum, default_value = "recent")]
    sort: FeedSort,

    /// Page of results to show
    #[arg(short, long, default_value_t = 1)]
    page: usize,

    /// Add a post with this text before listing
    #[arg(long)]
    post: Option<String>,

    /// Toggle the like on a post id before listing
    #[arg(short, long)]
    like: Option<i64>,
}

/// Executes the feed command.
pub fn cmd(args: FeedArgs) -> Result<()> {
    let mut feed = Feed::new();

    if let Some(text) = &args.post {
        let text = text.trim();
        if text.is_empty() {
            msg_error!(Message::PostTextRequired);
        } else {
            feed.add_post(text);
            msg_success!(Message::PostAdded);
        }
    }

    if let Some(id) = args.like {
        match feed.toggle_like(id) {
            Some((author, true)) => msg_success!(Message::PostLiked(author)),
            Some((author, false)) => msg_info!(Message::PostUnliked(author)),
            None => msg_info!(Message::PostNotFoundWithId(id)),
        }
    }

    let posts = feed.query(&args.filter, args.sort);

    msg_print!(Message::FeedHeader, true);

    let page = Page::compute(posts.len(), Config::read()?.page_size(), args.page);
    if posts.is_empty() {
        msg_info!(Message::FeedEmpty);
    } else {
        View::feed(page.slice(&posts))?;
    }
    msg_print!(Message::PageInfo(page.number, page.total_pages));
    Ok(())
}
