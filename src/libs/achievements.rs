//! Achievements: level card, badges, milestones, and leaderboard.
//!
//! Badges, the leaderboard, and the level card are fixed demo data. The
//! counter-backed milestones are live: their progress is derived from the
//! tracker snapshot at assembly time, so taking a first quiz or logging
//! study hours moves the bars.

use crate::libs::tracker::Snapshot;

/// The level/XP summary at the top of the achievements screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCard {
    pub level: u32,
    pub xp: u32,
    pub next_level_xp: u32,
}

impl LevelCard {
    /// Progress toward the next level as a whole percentage, floored.
    pub fn progress_percent(&self) -> u8 {
        if self.next_level_xp == 0 {
            return 100;
        }
        ((self.xp * 100 / self.next_level_xp).min(100)) as u8
    }
}

/// An earned badge.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub name: String,
    pub icon: String,
    pub date: String,
    pub description: String,
}

impl Badge {
    fn new(name: &str, icon: &str, date: &str, description: &str) -> Self {
        Badge {
            name: name.to_string(),
            icon: icon.to_string(),
            date: date.to_string(),
            description: description.to_string(),
        }
    }
}

/// A long-running goal with percentage progress.
///
/// `date` is the recorded completion date; milestones still in progress have
/// none. The view shows the date for completed milestones and a progress bar
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    pub name: String,
    pub icon: String,
    pub date: Option<String>,
    pub progress: u8,
}

impl Milestone {
    fn new(name: &str, icon: &str, date: Option<&str>, progress: u8) -> Self {
        Milestone {
            name: name.to_string(),
            icon: icon.to_string(),
            date: date.map(str::to_string),
            progress,
        }
    }
}

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub level: u32,
    pub xp: u32,
}

impl LeaderboardEntry {
    fn new(rank: u32, name: &str, level: u32, xp: u32) -> Self {
        LeaderboardEntry {
            rank,
            name: name.to_string(),
            level,
            xp,
        }
    }

    /// One badge per five levels.
    pub fn badge_count(&self) -> u32 {
        self.level / 5
    }
}

/// Everything the achievements screen renders.
pub struct Achievements {
    pub card: LevelCard,
    pub badges: Vec<Badge>,
    pub milestones: Vec<Milestone>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Achievements {
    /// Assembles the screen data, deriving milestone progress from the
    /// tracker snapshot.
    ///
    /// - "First Quiz" completes once `quizzesTaken` reaches 1
    /// - The study-hour milestones scale linearly and saturate at 100
    /// - The leaderboard-rank milestone keeps its demo progress; there is no
    ///   local source for a global rank
    ///
    /// Completion dates come from the demo data and only show once the
    /// derived progress actually reaches 100.
    pub fn assemble(snapshot: &Snapshot) -> Self {
        let first_quiz = if snapshot.quizzes_taken >= 1 { 100 } else { 0 };
        let ten_hours = counter_progress(snapshot.study_hours, 10);
        let fifty_hours = counter_progress(snapshot.study_hours, 50);

        Achievements {
            card: LevelCard {
                level: 15,
                xp: 1250,
                next_level_xp: 2000,
            },
            badges: vec![
                Badge::new("Fast Learner", "🚀", "2023-06-15", "Completed 5 quizzes in one day"),
                Badge::new("Book Worm", "📚", "2023-06-10", "Studied for 10 hours in one week"),
                Badge::new("Streak Starter", "🔥", "2023-06-05", "3-day study streak"),
                Badge::new("Quiz Master", "🧠", "2023-05-28", "Scored 100% on 3 quizzes"),
                Badge::new("Early Bird", "🌅", "2023-05-20", "Studied before 8 AM for 5 days"),
                Badge::new("Night Owl", "🌙", "2023-05-15", "Studied after 10 PM for 5 days"),
            ],
            milestones: vec![
                Milestone::new(
                    "First Quiz",
                    "🥇",
                    completed_date("2023-05-01", first_quiz),
                    first_quiz,
                ),
                Milestone::new(
                    "10 Study Hours",
                    "⏱️",
                    completed_date("2023-05-10", ten_hours),
                    ten_hours,
                ),
                Milestone::new("50 Study Hours", "⏳", None, fifty_hours),
                Milestone::new("Top 100 Leaderboard", "🏆", None, 42),
            ],
            leaderboard: vec![
                LeaderboardEntry::new(1, "Sarah Johnson", 42, 12500),
                LeaderboardEntry::new(2, "Michael Chen", 38, 11800),
                LeaderboardEntry::new(3, "Emma Williams", 35, 11250),
                LeaderboardEntry::new(4, "David Kim", 32, 10500),
                LeaderboardEntry::new(5, "Lisa Park", 30, 9800),
            ],
        }
    }
}

/// Linear progress toward `target`, saturating at 100.
///
/// `value` comes straight from stored counters, so the scaling must not
/// overflow on out-of-range hand-edited values.
fn counter_progress(value: u64, target: u64) -> u8 {
    ((value.saturating_mul(100) / target).min(100)) as u8
}

fn completed_date(date: &str, progress: u8) -> Option<&str> {
    if progress >= 100 {
        Some(date)
    } else {
        None
    }
}
