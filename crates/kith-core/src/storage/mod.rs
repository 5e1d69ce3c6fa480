//! Storage layer
//!
//! The whole dataset is persisted as one serialized blob under a fixed
//! location. `Persistence` is the seam the store is built against;
//! implementations are pure get/set with no entity semantics.

pub mod error;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use persistence::{FilePersistence, MemoryPersistence, Persistence};
