//! kith core library
//!
//! Single-device social graph store: users, posts, comments,
//! friendships, and likes, held in memory and mirrored to one persisted
//! blob after every mutation. There is exactly one simulated current
//! actor per store instance; there is no server, no sync, and no
//! concurrent writer.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open()?;  // Seeds a random dataset on first run
//!
//! let me = store.current_user().unwrap().id;
//! store.create_post(me, Some("hello"), None)?;
//!
//! for result in store.search("hello") {
//!     // matching users first, then matching posts
//! }
//! ```
//!
//! # Modules
//!
//! - `store`: the data store and its mutation/query operations
//! - `models`: User, Post, Comment, and the persisted Dataset shape
//! - `seed`: randomized initial dataset generation
//! - `storage`: the persistence seam (file-backed and in-memory)
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod seed;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::{Comment, Dataset, Post, ProfileUpdate, SearchResult, User};
pub use seed::SeedGenerator;
pub use storage::{FilePersistence, MemoryPersistence, Persistence, StorageError};
pub use store::{LikeTarget, Store};
