//! Dataset persistence
//!
//! The store treats storage as a single named record holding the whole
//! dataset. `Persistence` is the injectable seam: the file-backed
//! implementation writes one JSON blob with atomic writes (temp file,
//! fsync, rename); the in-memory implementation backs tests and
//! ephemeral runs.
//!
//! A blob that exists but cannot be deserialized is treated as absent:
//! the caller will regenerate seed data. There is no migration path.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::config::Config;
use crate::models::Dataset;
use crate::storage::error::{StorageError, StorageResult};

/// Storage seam for the dataset blob
///
/// Implementations have no knowledge of entity semantics; they move the
/// serialized dataset in and out of a single durable cell.
pub trait Persistence {
    /// Read the dataset, `None` if never written (or unreadable)
    fn load(&self) -> StorageResult<Option<Dataset>>;

    /// Overwrite the dataset (atomic from the reader's point of view)
    fn save(&self, dataset: &Dataset) -> StorageResult<()>;
}

/// File-backed persistence: one JSON file under the data directory
pub struct FilePersistence {
    config: Config,
}

impl FilePersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if a dataset exists on disk
    pub fn exists(&self) -> bool {
        self.config.dataset_path().exists()
    }

    /// Delete the stored dataset. Use with caution!
    pub fn delete(&self) -> StorageResult<()> {
        let path = self.config.dataset_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StorageError::from_io(e, path))?;
        }
        Ok(())
    }
}

impl Persistence for FilePersistence {
    fn load(&self) -> StorageResult<Option<Dataset>> {
        let path = self.config.dataset_path();

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(|e| StorageError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        // Corrupt data is treated as "no data"; the store will reseed.
        match serde_json::from_slice(&bytes) {
            Ok(dataset) => Ok(Some(dataset)),
            Err(e) => {
                warn!("Dataset at {:?} is unreadable, treating as absent: {}", path, e);
                Ok(None)
            }
        }
    }

    fn save(&self, dataset: &Dataset) -> StorageResult<()> {
        let bytes = serde_json::to_vec(dataset)?;
        atomic_write(&self.config.dataset_path(), &bytes)
    }
}

/// In-memory persistence for tests and ephemeral runs
#[derive(Default)]
pub struct MemoryPersistence {
    cell: RefCell<Option<Dataset>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a dataset already "persisted"
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            cell: RefCell::new(Some(dataset)),
        }
    }
}

impl Persistence for MemoryPersistence {
    fn load(&self) -> StorageResult<Option<Dataset>> {
        Ok(self.cell.borrow().clone())
    }

    fn save(&self, dataset: &Dataset) -> StorageResult<()> {
        *self.cell.borrow_mut() = Some(dataset.clone());
        Ok(())
    }
}

// Lets tests keep a handle on the adapter they hand to the store.
impl<P: Persistence + ?Sized> Persistence for std::rc::Rc<P> {
    fn load(&self) -> StorageResult<Option<Dataset>> {
        (**self).load()
    }

    fn save(&self, dataset: &Dataset) -> StorageResult<()> {
        (**self).save(dataset)
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
///
/// This ensures the target file is never left in a partially-written state.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Post, User};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            seed_users: 5,
            seed_posts: 5,
        }
    }

    fn sample_dataset() -> Dataset {
        let mut user = User::new("Ann", "a.png", "c.png", "Engineer");
        let friend = User::new("Ben", "b.png", "d.png", "Designer");
        user.add_friend(friend.id);
        let post = Post::new(user.id, Some("hello".to_string()), None);
        Dataset {
            users: vec![user, friend],
            posts: vec![post],
            comments: vec![],
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = FilePersistence::new(test_config(&temp_dir));

        // Initially no dataset
        assert!(!persistence.exists());
        assert!(persistence.load().unwrap().is_none());

        let dataset = sample_dataset();
        persistence.save(&dataset).unwrap();
        assert!(persistence.exists());

        // Round trip preserves ids and relations
        let loaded = persistence.load().unwrap().unwrap();
        assert_eq!(loaded, dataset);
        assert_eq!(loaded.users[0].friends, vec![dataset.users[1].id]);
    }

    #[test]
    fn test_corrupt_blob_treated_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let persistence = FilePersistence::new(config.clone());

        fs::write(config.dataset_path(), b"{ not json").unwrap();
        assert!(persistence.exists());

        assert!(persistence.load().unwrap().is_none());
    }

    #[test]
    fn test_stale_shape_treated_as_absent() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        let persistence = FilePersistence::new(config.clone());

        // Valid JSON, wrong shape
        fs::write(config.dataset_path(), br#"{"links": []}"#).unwrap();

        assert!(persistence.load().unwrap().is_none());
    }

    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = FilePersistence::new(test_config(&temp_dir));

        persistence.save(&sample_dataset()).unwrap();

        let second = Dataset::default();
        persistence.save(&second).unwrap();

        // Last writer wins
        let loaded = persistence.load().unwrap().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = FilePersistence::new(test_config(&temp_dir));

        persistence.save(&sample_dataset()).unwrap();
        assert!(persistence.exists());

        persistence.delete().unwrap();
        assert!(!persistence.exists());
        assert!(persistence.load().unwrap().is_none());
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path: PathBuf = temp_dir
            .path()
            .join("a")
            .join("b")
            .join("c")
            .join("file.txt");

        atomic_write(&nested_path, b"test data").unwrap();

        assert!(nested_path.exists());
        let content = fs::read_to_string(&nested_path).unwrap();
        assert_eq!(content, "test data");
    }

    #[test]
    fn test_memory_persistence() {
        let persistence = MemoryPersistence::new();
        assert!(persistence.load().unwrap().is_none());

        let dataset = sample_dataset();
        persistence.save(&dataset).unwrap();
        assert_eq!(persistence.load().unwrap().unwrap(), dataset);
    }

    #[test]
    fn test_memory_persistence_with_dataset() {
        let dataset = sample_dataset();
        let persistence = MemoryPersistence::with_dataset(dataset.clone());
        assert_eq!(persistence.load().unwrap().unwrap(), dataset);
    }
}
