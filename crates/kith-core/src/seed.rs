//! Seed data generation
//!
//! Produces the randomized initial dataset used on first run: users
//! with mutual friendships, posts, and comments. The RNG is injectable
//! so seeded runs are reproducible in tests.
//!
//! Friendship linking walks users in insertion order: each user samples
//! a target number of friends, and every relation is added to both
//! sides. Because later users' picks may land on earlier users who
//! already chose them, a user's final friend count can exceed its own
//! sampled target. That skew is expected.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::models::{Comment, Dataset, Post, User};

/// Default number of generated users
pub const DEFAULT_USER_COUNT: usize = 50;
/// Default number of generated posts
pub const DEFAULT_POST_COUNT: usize = 100;

const FIRST_NAMES: &[&str] = &[
    "Ann", "Ben", "Clara", "Dmytro", "Elena", "Felix", "Grace", "Hugo", "Iris", "Jonas", "Kateryna",
    "Liam", "Mira", "Noah", "Olha", "Pavlo", "Quinn", "Rosa", "Stefan", "Tamara", "Ulrich",
    "Vera", "Wim", "Yuri", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Andersen", "Bondar", "Carver", "Dubois", "Eriksen", "Fischer", "Gallo", "Hansen", "Ivanova",
    "Jensen", "Koval", "Larsen", "Moreau", "Novak", "Olsen", "Petrov", "Quint", "Rossi",
    "Schmidt", "Tkachenko", "Ueda", "Vasquez", "Weber", "Young", "Zhang",
];

const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Product Designer",
    "Data Analyst",
    "Marketing Manager",
    "Photographer",
    "Teacher",
    "Architect",
    "Illustrator",
    "Sound Engineer",
    "Copywriter",
    "UX Researcher",
    "Chef",
    "Game Developer",
    "Journalist",
    "Barista",
    "Project Manager",
    "Translator",
    "Florist",
    "Mechanic",
    "Librarian",
];

const LOREM: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
    "velit",
];

/// Generator for the randomized initial dataset
pub struct SeedGenerator<R: Rng> {
    rng: R,
    user_count: usize,
    post_count: usize,
}

impl SeedGenerator<StdRng> {
    /// Generator with an entropy-seeded RNG (production path)
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Generator with a fixed seed (reproducible datasets)
    pub fn from_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SeedGenerator<R> {
    /// Generator over a specific RNG with default counts
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            user_count: DEFAULT_USER_COUNT,
            post_count: DEFAULT_POST_COUNT,
        }
    }

    /// Override the user and post counts
    pub fn with_counts(mut self, user_count: usize, post_count: usize) -> Self {
        self.user_count = user_count;
        self.post_count = post_count;
        self
    }

    /// Produce a complete, internally consistent dataset
    pub fn generate(&mut self) -> Dataset {
        let mut users = self.generate_users();
        self.link_friends(&mut users);
        let posts = self.generate_posts(&users);
        let comments = self.generate_comments(&users, &posts);

        Dataset {
            users,
            posts,
            comments,
        }
    }

    fn generate_users(&mut self) -> Vec<User> {
        (0..self.user_count)
            .map(|_| {
                let first = FIRST_NAMES.choose(&mut self.rng).unwrap();
                let last = LAST_NAMES.choose(&mut self.rng).unwrap();
                let avatar = format!("https://avatars.example.com/{}.png", self.token());
                let cover = format!("https://images.example.com/{}/1200/400", self.token());
                let title = *JOB_TITLES.choose(&mut self.rng).unwrap();
                User::new(format!("{} {}", first, last), avatar, cover, title)
            })
            .collect()
    }

    /// Wire up mutual friendships
    ///
    /// Every relation is added to both sides; relations that already
    /// exist (from an earlier user's pick) are left alone.
    fn link_friends(&mut self, users: &mut [User]) {
        let n = users.len();
        if n < 2 {
            return;
        }

        for i in 0..n {
            let target = self.rng.gen_range(5..=15).min(n - 1);
            // Sample from the other users: indices into 0..n-1, shifted
            // past i to skip the user itself.
            let picks: Vec<usize> = index::sample(&mut self.rng, n - 1, target)
                .iter()
                .map(|j| if j >= i { j + 1 } else { j })
                .collect();

            for j in picks {
                if !users[i].is_friend(users[j].id) {
                    let (a, b) = (users[i].id, users[j].id);
                    users[i].add_friend(b);
                    users[j].add_friend(a);
                }
            }
        }
    }

    fn generate_posts(&mut self, users: &[User]) -> Vec<Post> {
        if users.is_empty() {
            return Vec::new();
        }
        (0..self.post_count)
            .map(|_| {
                let author = users.choose(&mut self.rng).unwrap();

                // Text or image or both, never neither.
                let text = self.rng.gen_bool(0.5).then(|| self.paragraph());
                let image = (self.rng.gen_bool(0.5) || text.is_none())
                    .then(|| format!("https://images.example.com/{}/800/600", self.token()));

                let mut post = Post::new(author.id, text, image);
                post.created_at = self.past_timestamp();
                post.likes = self.like_subset(users, 20);
                post
            })
            .collect()
    }

    fn generate_comments(&mut self, users: &[User], posts: &[Post]) -> Vec<Comment> {
        let mut comments = Vec::new();
        if users.is_empty() {
            return comments;
        }
        for post in posts {
            for _ in 0..self.rng.gen_range(0..=5) {
                let author = users.choose(&mut self.rng).unwrap();
                let mut comment = Comment::new(post.id, author.id, self.sentence());
                comment.created_at = self.past_timestamp();
                comment.likes = self.like_subset(users, 10);
                comments.push(comment);
            }
        }
        comments
    }

    /// Sample a random subset of user ids, between 0 and `max` of them
    fn like_subset(&mut self, users: &[User], max: usize) -> Vec<Uuid> {
        let count = self.rng.gen_range(0..=max).min(users.len());
        index::sample(&mut self.rng, users.len(), count)
            .iter()
            .map(|j| users[j].id)
            .collect()
    }

    /// A random instant within the past year
    fn past_timestamp(&mut self) -> DateTime<Utc> {
        let seconds_back = self.rng.gen_range(0..365 * 24 * 3600);
        Utc::now() - Duration::seconds(seconds_back)
    }

    fn sentence(&mut self) -> String {
        let word_count = self.rng.gen_range(5..=10);
        let mut words: Vec<&str> = (0..word_count)
            .map(|_| *LOREM.choose(&mut self.rng).unwrap())
            .collect();
        let mut first = words[0].to_string();
        first[..1].make_ascii_uppercase();
        words.remove(0);
        format!("{} {}.", first, words.join(" "))
    }

    fn paragraph(&mut self) -> String {
        let sentence_count = self.rng.gen_range(2..=4);
        (0..sentence_count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Short random token for generated image references
    fn token(&mut self) -> u32 {
        self.rng.gen_range(1_000..1_000_000)
    }
}
