pub mod achievements;
pub mod activity;
pub mod done;
pub mod feed;
pub mod init;
pub mod profile;
pub mod progress;
pub mod quiz;
pub mod schedule;
pub mod tasks;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Schedule a study task")]
    Schedule(schedule::ScheduleArgs),
    #[command(about = "List scheduled tasks")]
    Tasks,
    #[command(about = "Complete a scheduled task")]
    Done(done::DoneArgs),
    #[command(about = "Show study progress")]
    Progress,
    #[command(about = "Take a quiz or review past results")]
    Quiz(quiz::QuizArgs),
    #[command(about = "Show or edit the profile")]
    Profile(profile::ProfileArgs),
    #[command(about = "Browse activity history")]
    Activity(activity::ActivityArgs),
    #[command(about = "Browse the study feed")]
    Feed(feed::FeedArgs),
    #[command(about = "Show achievements and leaderboard")]
    Achievements,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Schedule(args) => schedule::cmd(args),
            Commands::Tasks => tasks::cmd(),
            Commands::Done(args) => done::cmd(args),
            Commands::Progress => progress::cmd(),
            Commands::Quiz(args) => quiz::cmd(args),
            Commands::Profile(args) => profile::cmd(args),
            Commands::Activity(args) => activity::cmd(args),
            Commands::Feed(args) => feed::cmd(args),
            Commands::Achievements => achievements::cmd(),
        }
    }
}
