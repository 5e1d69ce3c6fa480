//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use kith_core::{Comment, Post, SearchResult, Store, User};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Check if output is in quiet mode
    pub fn is_quiet(&self) -> bool {
        matches!(self.format, OutputFormat::Quiet)
    }

    /// Check if output is JSON
    pub fn is_json(&self) -> bool {
        matches!(self.format, OutputFormat::Json)
    }

    /// Print a feed of posts (already sorted by the caller)
    pub fn print_feed(&self, posts: &[&Post], store: &Store) {
        match self.format {
            OutputFormat::Human => {
                if posts.is_empty() {
                    println!("No posts yet.");
                    return;
                }
                for post in posts {
                    let author = author_name(store, post.author_id);
                    let summary = match post.text.as_deref() {
                        Some(text) => truncate_line(text, 50),
                        None => "[image]".to_string(),
                    };
                    println!(
                        "{} | {} | {} | {} | ♥{} 💬{}",
                        &post.id.to_string()[..8],
                        post.created_at.format("%Y-%m-%d %H:%M"),
                        truncate(&author, 20),
                        summary,
                        post.likes.len(),
                        store.comments_for_post(post.id).len()
                    );
                }
                println!("\n{} post(s)", posts.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(posts).unwrap());
            }
            OutputFormat::Quiet => {
                for post in posts {
                    println!("{}", post.id);
                }
            }
        }
    }

    /// Print a single post with its comments
    pub fn print_post(&self, post: &Post, store: &Store) {
        let comments = store.comments_for_post(post.id);
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", post.id);
                println!("Author:  {}", author_name(store, post.author_id));
                println!("Created: {}", post.created_at.format("%Y-%m-%d %H:%M"));
                if let Some(ref text) = post.text {
                    println!();
                    println!("{}", text);
                }
                if let Some(ref image) = post.image {
                    println!("Image:   {}", image);
                }
                println!();
                println!("{} like(s)", post.likes.len());

                if !comments.is_empty() {
                    println!();
                    println!("── Comments ({}) ──", comments.len());
                    for comment in &comments {
                        self.print_comment_row(comment, store);
                    }
                }
            }
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "post": post,
                        "comments": comments,
                    }))
                    .unwrap()
                );
            }
            OutputFormat::Quiet => {
                println!("{}", post.id);
            }
        }
    }

    fn print_comment_row(&self, comment: &Comment, store: &Store) {
        println!(
            "[{}] {} ({}): {} (♥{})",
            &comment.id.to_string()[..8],
            author_name(store, comment.author_id),
            comment.created_at.format("%Y-%m-%d"),
            truncate_line(&comment.text, 60),
            comment.likes.len()
        );
    }

    /// Print a single user's profile
    pub fn print_user(&self, user: &User) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:      {}", user.id);
                println!("Name:    {}", user.name);
                println!("Title:   {}", user.title);
                println!("Avatar:  {}", user.avatar);
                println!("Cover:   {}", user.cover_image);
                println!("Friends: {}", user.friends.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(user).unwrap());
            }
            OutputFormat::Quiet => {
                println!("{}", user.id);
            }
        }
    }

    /// Print a list of users
    pub fn print_users(&self, users: &[&User]) {
        match self.format {
            OutputFormat::Human => {
                if users.is_empty() {
                    println!("No users found.");
                    return;
                }
                for user in users {
                    println!(
                        "{} | {} | {}",
                        &user.id.to_string()[..8],
                        truncate(&user.name, 25),
                        truncate(&user.title, 35)
                    );
                }
                println!("\n{} user(s)", users.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(users).unwrap());
            }
            OutputFormat::Quiet => {
                for user in users {
                    println!("{}", user.id);
                }
            }
        }
    }

    /// Print search results: matching users first, then posts
    pub fn print_results(&self, results: &[SearchResult], store: &Store) {
        match self.format {
            OutputFormat::Human => {
                if results.is_empty() {
                    println!("No matches.");
                    return;
                }
                for result in results {
                    match result {
                        SearchResult::User(user) => {
                            println!(
                                "user | {} | {} | {}",
                                &user.id.to_string()[..8],
                                truncate(&user.name, 25),
                                truncate(&user.title, 30)
                            );
                        }
                        SearchResult::Post(post) => {
                            let text = post.text.as_deref().unwrap_or("");
                            println!(
                                "post | {} | {} | {}",
                                &post.id.to_string()[..8],
                                truncate(&author_name(store, post.author_id), 20),
                                truncate_line(text, 45)
                            );
                        }
                    }
                }
                println!("\n{} match(es)", results.len());
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(results).unwrap());
            }
            OutputFormat::Quiet => {
                for result in results {
                    match result {
                        SearchResult::User(user) => println!("{}", user.id),
                        SearchResult::Post(post) => println!("{}", post.id),
                    }
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }
}

/// Resolve an author id to a display name
fn author_name(store: &Store, id: uuid::Uuid) -> String {
    store
        .user(id)
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "(unknown)".to_string())
}

/// Truncate a string to max length, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

/// Truncate to first line and max length
fn truncate_line(s: &str, max_len: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    truncate(first_line, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_line() {
        assert_eq!(truncate_line("single line", 20), "single line");
        assert_eq!(truncate_line("line one\nline two", 20), "line one");
        assert_eq!(
            truncate_line("very long single line here", 10),
            "very lo..."
        );
    }
}
