/*
    errors.rs - Error types for the identity subsystem
*/

use crate::core_store::store::ValidationError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur in the credential store
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Signup collision on an existing username (case-sensitive match)
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),

    /// Bad login credentials. Deliberately generic: unknown user and
    /// wrong password are indistinguishable to the caller.
    #[error("Authentication failed")]
    AuthFailure,

    /// A required field was empty
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Persistence backend failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Failed to encode state for persistence
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persisted state could not be decoded
    #[error("Corrupted data under key '{key}': {reason}")]
    CorruptedData { key: &'static str, reason: String },
}

/// Result type for identity operations
pub type IdentityResult<T> = Result<T, IdentityError>;
