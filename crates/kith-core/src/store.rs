//! The social graph store
//!
//! The `Store` owns the canonical in-memory snapshot (users, posts,
//! comments, current actor) and is the only writer. Every mutation
//! validates its preconditions, updates the snapshot, and re-persists
//! the full dataset before returning.
//!
//! ## Mutation contract
//!
//! Precondition failures (no current actor, empty required text,
//! missing target) are silent no-ops: the operation returns `Ok(None)`
//! or `Ok(())` and the snapshot is unchanged. Only storage I/O failures
//! surface as errors.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open()?;  // Seeds on first run
//!
//! let post = store.create_post(author_id, Some("hello"), None)?;
//! let results = store.search("hello");
//! ```

use anyhow::{Context, Result};
use rand::Rng;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::Config;
use crate::models::{
    toggle_membership, Comment, Dataset, Post, ProfileUpdate, SearchResult, User,
};
use crate::seed::SeedGenerator;
use crate::storage::{FilePersistence, Persistence};

/// Which kind of entity a like targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Post,
    Comment,
}

/// The canonical data store for one device
pub struct Store {
    /// The three entity collections, exactly the persisted shape
    data: Dataset,
    /// The simulated "logged in" user; None before initialization
    current_user_id: Option<Uuid>,
    /// Storage seam for the dataset blob
    persistence: Box<dyn Persistence>,
}

impl Store {
    /// Open the store at the default location, seeding on first run
    pub fn open() -> Result<Self> {
        let config = Config::load().context("Failed to load configuration")?;
        Self::open_with_config(config)
    }

    /// Open the store with a specific configuration
    pub fn open_with_config(config: Config) -> Result<Self> {
        let mut seeder =
            SeedGenerator::from_entropy().with_counts(config.seed_users, config.seed_posts);
        let mut store = Self::new(Box::new(FilePersistence::new(config)));
        store.initialize(&mut seeder)?;
        Ok(store)
    }

    /// Create an uninitialized store over the given persistence
    ///
    /// The snapshot is empty and there is no current actor until
    /// `initialize` runs; all actor-scoped mutations are no-ops.
    pub fn new(persistence: Box<dyn Persistence>) -> Self {
        Self {
            data: Dataset::default(),
            current_user_id: None,
            persistence,
        }
    }

    /// Load the persisted dataset, or generate and persist one
    ///
    /// The current actor becomes the first user in the collection (the
    /// demo user is always index 0). Call once at startup; calling
    /// again re-runs initialization and replaces the snapshot.
    pub fn initialize<R: Rng>(&mut self, seeder: &mut SeedGenerator<R>) -> Result<()> {
        let data = match self
            .persistence
            .load()
            .context("Failed to load persisted dataset")?
        {
            Some(data) => data,
            None => {
                let data = seeder.generate();
                info!(
                    "No persisted dataset, seeded {} users / {} posts / {} comments",
                    data.users.len(),
                    data.posts.len(),
                    data.comments.len()
                );
                self.persistence
                    .save(&data)
                    .context("Failed to persist seeded dataset")?;
                data
            }
        };

        self.current_user_id = data.users.first().map(|u| u.id);
        self.data = data;
        Ok(())
    }

    // ==================== Mutations ====================

    /// Create a post authored by `author_id`
    ///
    /// No-op (`Ok(None)`) when there is no current actor or when both
    /// text and image trim to empty. The new post is prepended to the
    /// collection; display order is a read-time sort, not a storage
    /// guarantee.
    pub fn create_post(
        &mut self,
        author_id: Uuid,
        text: Option<&str>,
        image: Option<&str>,
    ) -> Result<Option<Post>> {
        if self.current_user_id.is_none() {
            return Ok(None);
        }

        let text = non_empty(text);
        let image = non_empty(image);
        if text.is_none() && image.is_none() {
            return Ok(None);
        }

        let post = Post::new(author_id, text, image);
        debug!("Creating post {}", post.id);
        self.data.posts.insert(0, post.clone());
        self.persist()?;
        Ok(Some(post))
    }

    /// Create a comment on `post_id` authored by `author_id`
    ///
    /// No-op (`Ok(None)`) when there is no current actor or the text
    /// trims to empty. The parent post is not checked for existence.
    pub fn create_comment(
        &mut self,
        post_id: Uuid,
        author_id: Uuid,
        text: &str,
    ) -> Result<Option<Comment>> {
        if self.current_user_id.is_none() {
            return Ok(None);
        }

        let Some(text) = non_empty(Some(text)) else {
            return Ok(None);
        };

        let comment = Comment::new(post_id, author_id, text);
        debug!("Creating comment {} on post {}", comment.id, post_id);
        self.data.comments.insert(0, comment.clone());
        self.persist()?;
        Ok(Some(comment))
    }

    /// Toggle the current actor's like on a post or comment
    ///
    /// Strict membership flip: remove if present, add if absent. No-op
    /// when there is no current actor or the id does not resolve to an
    /// entity of the given kind.
    pub fn toggle_like(&mut self, target: LikeTarget, id: Uuid) -> Result<()> {
        let Some(actor) = self.current_user_id else {
            return Ok(());
        };

        let toggled = match target {
            LikeTarget::Post => self
                .data
                .posts
                .iter_mut()
                .find(|p| p.id == id)
                .map(|p| toggle_membership(&mut p.likes, actor)),
            LikeTarget::Comment => self
                .data
                .comments
                .iter_mut()
                .find(|c| c.id == id)
                .map(|c| toggle_membership(&mut c.likes, actor)),
        };

        match toggled {
            Some(added) => {
                debug!("Like on {:?} {} toggled, added={}", target, id, added);
                self.persist()
            }
            None => Ok(()),
        }
    }

    /// Toggle friendship between the current actor and `other_id`
    ///
    /// Both sides change together, so an asymmetric state is never
    /// reachable. No-op when there is no current actor, the target is
    /// the actor itself, or the target id resolves to no user.
    pub fn toggle_friend(&mut self, other_id: Uuid) -> Result<()> {
        let Some(actor) = self.current_user_id else {
            return Ok(());
        };
        if actor == other_id {
            return Ok(());
        }
        if !self.data.users.iter().any(|u| u.id == other_id) {
            return Ok(());
        }

        let currently_friends = self
            .data
            .users
            .iter()
            .find(|u| u.id == actor)
            .is_some_and(|u| u.is_friend(other_id));

        for user in self.data.users.iter_mut() {
            let counterpart = if user.id == actor {
                other_id
            } else if user.id == other_id {
                actor
            } else {
                continue;
            };
            if currently_friends {
                user.remove_friend(counterpart);
            } else {
                user.add_friend(counterpart);
            }
        }

        debug!(
            "Friendship between {} and {} toggled, now_friends={}",
            actor, other_id, !currently_friends
        );
        self.persist()
    }

    /// Merge profile fields into the current actor's record
    ///
    /// Unset fields keep their prior values. No-op when there is no
    /// current actor. The actor accessor resolves by id, so callers
    /// observe the merged record immediately.
    pub fn update_profile(&mut self, update: &ProfileUpdate) -> Result<()> {
        let Some(actor) = self.current_user_id else {
            return Ok(());
        };

        let Some(user) = self.data.users.iter_mut().find(|u| u.id == actor) else {
            return Ok(());
        };

        update.apply_to(user);
        debug!("Profile updated for {}", actor);
        self.persist()
    }

    // ==================== Queries ====================

    /// Case-insensitive substring search over users and posts
    ///
    /// Users match on name or title, posts on text only; posts without
    /// text are unmatchable. All matching users come first (collection
    /// order), then all matching posts (collection order). An empty
    /// query matches every user and every text-bearing post; callers
    /// guard against issuing it if undesired.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let needle = query.to_lowercase();
        let mut results = Vec::new();

        for user in &self.data.users {
            if user.name.to_lowercase().contains(&needle)
                || user.title.to_lowercase().contains(&needle)
            {
                results.push(SearchResult::User(user.clone()));
            }
        }

        for post in &self.data.posts {
            if let Some(ref text) = post.text {
                if text.to_lowercase().contains(&needle) {
                    results.push(SearchResult::Post(post.clone()));
                }
            }
        }

        results
    }

    /// The current actor, resolved against the user collection
    pub fn current_user(&self) -> Option<&User> {
        let id = self.current_user_id?;
        self.data.users.iter().find(|u| u.id == id)
    }

    /// All users in collection order
    pub fn users(&self) -> &[User] {
        &self.data.users
    }

    /// All posts in collection (insertion) order
    pub fn posts(&self) -> &[Post] {
        &self.data.posts
    }

    /// All comments in collection order
    pub fn comments(&self) -> &[Comment] {
        &self.data.comments
    }

    /// Look up a user by id
    pub fn user(&self, id: Uuid) -> Option<&User> {
        self.data.users.iter().find(|u| u.id == id)
    }

    /// Look up a post by id
    pub fn post(&self, id: Uuid) -> Option<&Post> {
        self.data.posts.iter().find(|p| p.id == id)
    }

    /// Look up a comment by id
    pub fn comment(&self, id: Uuid) -> Option<&Comment> {
        self.data.comments.iter().find(|c| c.id == id)
    }

    /// Comments belonging to one post, collection order
    pub fn comments_for_post(&self, post_id: Uuid) -> Vec<&Comment> {
        self.data
            .comments
            .iter()
            .filter(|c| c.post_id == post_id)
            .collect()
    }

    /// Resolve a user's friend list to user records, collection order
    pub fn friends_of(&self, user_id: Uuid) -> Vec<&User> {
        let Some(user) = self.user(user_id) else {
            return Vec::new();
        };
        self.data
            .users
            .iter()
            .filter(|u| user.friends.contains(&u.id))
            .collect()
    }

    /// Persist the full snapshot
    fn persist(&self) -> Result<()> {
        self.persistence
            .save(&self.data)
            .context("Failed to persist dataset")
    }
}

/// Trim an optional string, mapping whitespace-only to None
fn non_empty(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
