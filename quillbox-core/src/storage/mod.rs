//! Persistence port for durable local state
//!
//! Every durable piece of state lives under one of four well-known keys,
//! each holding a single JSON document. Stores serialize their snapshots
//! and hand the encoded text to a backend; backends never interpret it.

use thiserror::Error;

mod json_file;
mod memory;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

/// Errors that can occur in a persistence backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend-internal failure
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Well-known keys of the durable key-value layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Registered username/password pairs
    Users,
    /// The current session, absent when logged out
    Session,
    /// All content items, including nested comments
    ContentData,
    /// In-progress unsaved content form
    ContentDraft,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Users => "users",
            StorageKey::Session => "user",
            StorageKey::ContentData => "contentData",
            StorageKey::ContentDraft => "contentDraft",
        }
    }
}

/// The seam between the stores and the storage mechanism.
///
/// Implementations must be usable behind an `Arc` shared by both stores.
/// `load` distinguishes "key absent" (`None`) from a read failure.
pub trait PersistencePort: Send + Sync {
    /// Persist the JSON document under `key`, replacing any previous value.
    fn save(&self, key: StorageKey, json: &str) -> StorageResult<()>;

    /// Read the JSON document under `key`, or `None` if the key is absent.
    fn load(&self, key: StorageKey) -> StorageResult<Option<String>>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: StorageKey) -> StorageResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_names() {
        assert_eq!(StorageKey::Users.as_str(), "users");
        assert_eq!(StorageKey::Session.as_str(), "user");
        assert_eq!(StorageKey::ContentData.as_str(), "contentData");
        assert_eq!(StorageKey::ContentDraft.as_str(), "contentDraft");
    }

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Backend("lock poisoned".to_string());
        assert_eq!(err.to_string(), "Storage backend error: lock poisoned");
    }
}
