//! Data models for kith
//!
//! Defines the core entities: User, Post, and Comment, plus the
//! `Dataset` shape that gets persisted as a single blob.
//!
//! Like and friend lists are `Vec<Uuid>` with set semantics: membership
//! is contains-checked and never duplicated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A member of the social graph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Avatar image reference
    pub avatar: String,
    /// Profile cover image reference
    pub cover_image: String,
    /// Title / role line shown under the name
    pub title: String,
    /// Ids of this user's friends (symmetric relation)
    pub friends: Vec<Uuid>,
}

impl User {
    /// Create a new user with an empty friend list
    pub fn new(
        name: impl Into<String>,
        avatar: impl Into<String>,
        cover_image: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            avatar: avatar.into(),
            cover_image: cover_image.into(),
            title: title.into(),
            friends: Vec::new(),
        }
    }

    /// Check whether `other` is in this user's friend list
    pub fn is_friend(&self, other: Uuid) -> bool {
        self.friends.contains(&other)
    }

    /// Add a friend id (no-op if already present)
    pub fn add_friend(&mut self, other: Uuid) {
        if !self.friends.contains(&other) {
            self.friends.push(other);
        }
    }

    /// Remove a friend id (no-op if absent)
    pub fn remove_friend(&mut self, other: Uuid) {
        if let Some(pos) = self.friends.iter().position(|id| *id == other) {
            self.friends.remove(pos);
        }
    }
}

/// A post in the feed
///
/// At least one of `text` and `image` is present at creation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Unique identifier
    pub id: Uuid,
    /// Id of the authoring user
    pub author_id: Uuid,
    /// Optional body text
    pub text: Option<String>,
    /// Optional image reference
    pub image: Option<String>,
    /// When this post was created
    pub created_at: DateTime<Utc>,
    /// Ids of users who liked this post
    pub likes: Vec<Uuid>,
}

impl Post {
    /// Create a new post with the current timestamp and no likes
    pub fn new(author_id: Uuid, text: Option<String>, image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            text,
            image,
            created_at: Utc::now(),
            likes: Vec::new(),
        }
    }

    /// Check whether `user_id` has liked this post
    pub fn liked_by(&self, user_id: Uuid) -> bool {
        self.likes.contains(&user_id)
    }
}

/// A comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Unique identifier
    pub id: Uuid,
    /// Id of the post this comment belongs to
    pub post_id: Uuid,
    /// Id of the authoring user
    pub author_id: Uuid,
    /// Comment text (never empty)
    pub text: String,
    /// When this comment was created
    pub created_at: DateTime<Utc>,
    /// Ids of users who liked this comment
    pub likes: Vec<Uuid>,
}

impl Comment {
    /// Create a new comment with the current timestamp and no likes
    pub fn new(post_id: Uuid, author_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            text: text.into(),
            created_at: Utc::now(),
            likes: Vec::new(),
        }
    }

    /// Check whether `user_id` has liked this comment
    pub fn liked_by(&self, user_id: Uuid) -> bool {
        self.likes.contains(&user_id)
    }
}

/// Flip `user_id` membership in a like list: remove if present, add if
/// absent. Returns true if the id was added.
pub(crate) fn toggle_membership(likes: &mut Vec<Uuid>, user_id: Uuid) -> bool {
    if let Some(pos) = likes.iter().position(|id| *id == user_id) {
        likes.remove(pos);
        false
    } else {
        likes.push(user_id);
        true
    }
}

/// The full persisted dataset
///
/// This is exactly the shape written to storage: three collections,
/// no schema version field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

impl Dataset {
    /// True when all three collections are empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.posts.is_empty() && self.comments.is_empty()
    }
}

/// A partial profile update
///
/// `None` fields keep their prior values when merged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub cover_image: Option<String>,
    pub title: Option<String>,
}

impl ProfileUpdate {
    /// Merge the set fields into `user`, leaving unset fields alone
    pub fn apply_to(&self, user: &mut User) {
        if let Some(ref name) = self.name {
            user.name = name.clone();
        }
        if let Some(ref avatar) = self.avatar {
            user.avatar = avatar.clone();
        }
        if let Some(ref cover_image) = self.cover_image {
            user.cover_image = cover_image.clone();
        }
        if let Some(ref title) = self.title {
            user.title = title.clone();
        }
    }
}

/// A single search hit: a matching user or a matching post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "item", rename_all = "lowercase")]
pub enum SearchResult {
    User(User),
    Post(Post),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_new() {
        let user = User::new("Ann Field", "avatar.png", "cover.png", "Engineer");
        assert_eq!(user.name, "Ann Field");
        assert_eq!(user.title, "Engineer");
        assert!(user.friends.is_empty());
    }

    #[test]
    fn test_user_friend_dedup() {
        let mut user = User::new("Ann", "a", "c", "t");
        let other = Uuid::new_v4();

        user.add_friend(other);
        user.add_friend(other);
        assert_eq!(user.friends.len(), 1);
        assert!(user.is_friend(other));

        user.remove_friend(other);
        assert!(user.friends.is_empty());

        // Removing again is a no-op
        user.remove_friend(other);
        assert!(user.friends.is_empty());
    }

    #[test]
    fn test_post_new() {
        let author = Uuid::new_v4();
        let post = Post::new(author, Some("hello".to_string()), None);
        assert_eq!(post.author_id, author);
        assert_eq!(post.text.as_deref(), Some("hello"));
        assert!(post.image.is_none());
        assert!(post.likes.is_empty());
    }

    #[test]
    fn test_toggle_membership() {
        let mut likes = Vec::new();
        let user = Uuid::new_v4();

        assert!(toggle_membership(&mut likes, user));
        assert_eq!(likes, vec![user]);

        assert!(!toggle_membership(&mut likes, user));
        assert!(likes.is_empty());
    }

    #[test]
    fn test_profile_update_merges_set_fields_only() {
        let mut user = User::new("Ann", "a.png", "c.png", "Engineer");
        let update = ProfileUpdate {
            name: Some("Ann Field".to_string()),
            title: Some("Staff Engineer".to_string()),
            ..Default::default()
        };

        update.apply_to(&mut user);

        assert_eq!(user.name, "Ann Field");
        assert_eq!(user.title, "Staff Engineer");
        // Untouched fields keep prior values
        assert_eq!(user.avatar, "a.png");
        assert_eq!(user.cover_image, "c.png");
    }

    #[test]
    fn test_dataset_serialization_round_trip() {
        let mut user = User::new("Ann", "a.png", "c.png", "Engineer");
        let friend = User::new("Ben", "b.png", "d.png", "Designer");
        user.add_friend(friend.id);

        let post = Post::new(user.id, Some("hello world".to_string()), None);
        let comment = Comment::new(post.id, friend.id, "nice");

        let dataset = Dataset {
            users: vec![user, friend],
            posts: vec![post],
            comments: vec![comment],
        };

        let json = serde_json::to_string(&dataset).unwrap();
        let decoded: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(dataset, decoded);
    }

    #[test]
    fn test_search_result_tagged_serialization() {
        let user = User::new("Ann", "a", "c", "t");
        let json = serde_json::to_value(SearchResult::User(user.clone())).unwrap();
        assert_eq!(json["kind"], "user");
        assert_eq!(json["item"]["name"], "Ann");
    }
}
