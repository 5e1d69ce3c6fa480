//! Storage error handling
//!
//! Typed errors for dataset persistence with descriptive messages.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to create data directory
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Permission denied accessing path
    #[error("Permission denied: cannot access '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Disk is full or quota exceeded
    #[error(
        "Disk full or quota exceeded while writing to '{path}'. Free up disk space and try again."
    )]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read file
    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write file
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Dataset could not be serialized
    #[error("Failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Atomic write failed during rename
    #[error("Atomic write failed: could not rename '{from}' to '{to}': {source}")]
    AtomicWriteFailed {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StorageError {
    /// Create an error from an I/O error with path context
    ///
    /// Classifies the error based on its kind (permission, disk full, etc.)
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::PermissionDenied => StorageError::PermissionDenied {
                path,
                source: error,
            },
            _ if is_disk_full_error(&error) => StorageError::DiskFull {
                path,
                source: error,
            },
            _ => StorageError::WriteError {
                path,
                source: error,
            },
        }
    }
}

/// Check if an I/O error indicates disk full condition
fn is_disk_full_error(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    msg.contains("no space left")
        || msg.contains("disk full")
        || msg.contains("quota exceeded")
        || msg.contains("not enough space")
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_classification() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = StorageError::from_io(io_err, PathBuf::from("/test/path"));

        assert!(matches!(err, StorageError::PermissionDenied { .. }));
    }

    #[test]
    fn test_disk_full_detection() {
        let io_err = io::Error::new(io::ErrorKind::Other, "No space left on device");
        let err = StorageError::from_io(io_err, PathBuf::from("/full/disk"));

        assert!(matches!(err, StorageError::DiskFull { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = StorageError::PermissionDenied {
            path: PathBuf::from("/test/file"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let msg = err.to_string();
        assert!(msg.contains("Permission denied"));
        assert!(msg.contains("/test/file"));
    }
}
