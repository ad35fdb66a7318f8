//! Community feed: seeded posts with filtering, sorting, and likes.
//!
//! The feed lives in memory for the duration of one command, seeded with
//! three demo posts. Queries filter and sort over copies so the underlying
//! insertion order (newest first) is never disturbed; only `add_post` and
//! `toggle_like` mutate the store itself.

use chrono::Local;
use clap::ValueEnum;

/// One feed post. `time` is a human-readable age string as the demo data
/// shipped it; new posts read "Just now".
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub author: String,
    pub author_title: String,
    pub kind: String,
    pub time: String,
    pub content: String,
    /// Attached file or image name, demo data only.
    pub attachment: Option<String>,
    pub likes: u32,
    pub comments: u32,
    pub liked: bool,
}

/// Sort orders for feed queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FeedSort {
    /// Insertion order, newest first.
    Recent,
    /// Most likes first.
    Popular,
    /// Most comments first.
    Commented,
}

/// The in-memory post store plus the posting identity.
pub struct Feed {
    posts: Vec<Post>,
    current_user: String,
}

impl Feed {
    /// Seeds the demo feed. Post kinds in the seed are `achievement`,
    /// `notes`, and `question`; user-created posts get kind `post`.
    pub fn new() -> Self {
        Feed {
            posts: vec![
                Post {
                    id: 1,
                    author: "Sarah Johnson".to_string(),
                    author_title: "Computer Science Major".to_string(),
                    kind: "achievement".to_string(),
                    time: "2 hours ago".to_string(),
                    content: "Just reached 100 study hours on StudyMate! 🎉".to_string(),
                    attachment: None,
                    likes: 24,
                    comments: 8,
                    liked: false,
                },
                Post {
                    id: 2,
                    author: "Michael Chen".to_string(),
                    author_title: "Engineering Student".to_string(),
                    kind: "notes".to_string(),
                    time: "5 hours ago".to_string(),
                    content: "Shared my notes on Data Structures and Algorithms. Hope this helps everyone preparing for exams!"
                        .to_string(),
                    attachment: Some("DSA_Notes.pdf".to_string()),
                    likes: 18,
                    comments: 5,
                    liked: true,
                },
                Post {
                    id: 3,
                    author: "Emma Williams".to_string(),
                    author_title: "Mathematics Tutor".to_string(),
                    kind: "question".to_string(),
                    time: "1 day ago".to_string(),
                    content: "Can someone explain how to solve this calculus problem? I'm stuck on the integration part."
                        .to_string(),
                    attachment: Some("math-problem.jpg".to_string()),
                    likes: 12,
                    comments: 14,
                    liked: false,
                },
            ],
            current_user: "Gift Rametsi".to_string(),
        }
    }

    /// All posts in store order, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Returns a filtered, sorted copy of the feed.
    ///
    /// Sorting never reorders the store itself; `recent` is the store order.
    pub fn query(&self, kind: &str, sort: FeedSort) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|post| kind == "all" || post.kind == kind)
            .cloned()
            .collect();
        match sort {
            FeedSort::Recent => {}
            FeedSort::Popular => posts.sort_by(|a, b| b.likes.cmp(&a.likes)),
            FeedSort::Commented => posts.sort_by(|a, b| b.comments.cmp(&a.comments)),
        }
        posts
    }

    /// Prepends a new post by the current user and returns it.
    ///
    /// The caller validates and trims the text; the feed stores it as given.
    pub fn add_post(&mut self, content: &str) -> &Post {
        let now = Local::now().timestamp_millis();
        let id = match self.posts.iter().map(|post| post.id).max() {
            Some(max_id) => now.max(max_id + 1),
            None => now,
        };
        self.posts.insert(
            0,
            Post {
                id,
                author: self.current_user.clone(),
                author_title: "Student".to_string(),
                kind: "post".to_string(),
                time: "Just now".to_string(),
                content: content.to_string(),
                attachment: None,
                likes: 0,
                comments: 0,
                liked: false,
            },
        );
        &self.posts[0]
    }

    /// Toggles the liked flag on a post, adjusting its like count by one.
    ///
    /// Returns the post's author and new liked state, or `None` for an
    /// unknown id (a no-op).
    pub fn toggle_like(&mut self, id: i64) -> Option<(String, bool)> {
        let post = self.posts.iter_mut().find(|post| post.id == id)?;
        if post.liked {
            post.likes -= 1;
            post.liked = false;
        } else {
            post.likes += 1;
            post.liked = true;
        }
        Some((post.author.clone(), post.liked))
    }
}

impl Default for Feed {
    fn default() -> Self {
        Feed::new()
    }
}
