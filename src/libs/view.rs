//! Console rendering for every listing and card in the application.

use super::achievements::{Badge, LeaderboardEntry, LevelCard, Milestone};
use super::activity::Activity;
use super::feed::Post;
use super::formatter::{capitalize, format_bar, format_number};
use super::profile::Profile;
use super::quiz::QuizResult;
use super::task::Task;
use super::tracker::Snapshot;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Active tasks in insertion order.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DATE", "TIME"]);
        for task in tasks {
            table.add_row(row![task.id, task.name, task.date, task.time]);
        }
        table.printstd();

        Ok(())
    }

    /// The progress summary: task count plus both counters.
    pub fn progress(snapshot: &Snapshot) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Scheduled tasks", snapshot.tasks.len()]);
        table.add_row(row!["Study hours", snapshot.study_hours]);
        table.add_row(row!["Quizzes taken", snapshot.quizzes_taken]);
        table.printstd();

        Ok(())
    }

    /// Stored quiz results, oldest first.
    pub fn quiz_history(history: &[QuizResult]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "SCORE", "QUESTIONS", "PERCENTAGE"]);
        for result in history {
            table.add_row(row![
                result.date,
                result.score,
                result.total_questions,
                format!("{}%", result.percentage)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// The profile card: identity, live stats, skills, bio.
    pub fn profile(profile: &Profile, snapshot: &Snapshot) -> Result<()> {
        println!("{} ({})", profile.name, profile.title);
        println!("{}", profile.school);
        println!(
            "Followers: {}  Following: {}  Theme: {}",
            profile.followers,
            profile.following,
            if profile.dark_mode { "dark 🌙" } else { "light ☀️" }
        );
        println!(
            "Study hours: {}  Quizzes taken: {}",
            snapshot.study_hours, snapshot.quizzes_taken
        );
        println!();

        let mut table = Table::new();
        table.add_row(row!["SKILL", "LEVEL", ""]);
        for skill in &profile.skills {
            table.add_row(row![skill.name, format!("{}%", skill.level), format_bar(skill.level, 20)]);
        }
        table.printstd();

        println!();
        println!("{}", profile.bio);

        Ok(())
    }

    /// One page of activity records.
    pub fn activities(activities: &[Activity]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "TYPE", "DURATION", "DETAILS"]);
        for activity in activities {
            table.add_row(row![
                activity.date,
                capitalize(&activity.kind),
                activity.duration,
                activity.details
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// One page of feed posts as text blocks.
    pub fn feed(posts: &[Post]) -> Result<()> {
        for post in posts {
            println!(
                "[{}] {} ({}) {}",
                capitalize(&post.kind),
                post.author,
                post.author_title,
                post.time
            );
            println!("    {}", post.content);
            if let Some(attachment) = &post.attachment {
                println!("    📎 {}", attachment);
            }
            let like_label = if post.liked { "Liked" } else { "Like" };
            println!("    👍 {} {}  💬 {}  (id {})", post.likes, like_label, post.comments, post.id);
            println!();
        }

        Ok(())
    }

    /// The level/XP summary with its progress bar.
    pub fn level_card(card: &LevelCard) -> Result<()> {
        println!(
            "Level {}  {} / {} XP",
            card.level,
            format_number(card.xp as u64),
            format_number(card.next_level_xp as u64)
        );
        println!("{} {}%", format_bar(card.progress_percent(), 20), card.progress_percent());

        Ok(())
    }

    pub fn badges(badges: &[Badge]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "BADGE", "EARNED", "DESCRIPTION"]);
        for badge in badges {
            table.add_row(row![badge.icon, badge.name, badge.date, badge.description]);
        }
        table.printstd();

        Ok(())
    }

    /// Milestones show their completion date once done, a bar otherwise.
    pub fn milestones(milestones: &[Milestone]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["", "MILESTONE", "PROGRESS"]);
        for milestone in milestones {
            let progress = match &milestone.date {
                Some(date) => format!("completed {}", date),
                None => format!("{} {}%", format_bar(milestone.progress, 10), milestone.progress),
            };
            table.add_row(row![milestone.icon, milestone.name, progress]);
        }
        table.printstd();

        Ok(())
    }

    pub fn leaderboard(entries: &[LeaderboardEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["RANK", "NAME", "LEVEL", "XP", "BADGES"]);
        for entry in entries {
            table.add_row(row![
                entry.rank,
                entry.name,
                entry.level,
                format_number(entry.xp as u64),
                entry.badge_count()
            ]);
        }
        table.printstd();

        Ok(())
    }
}
