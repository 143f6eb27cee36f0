/*
    errors.rs - Error types for the store subsystem

    Every failure a store operation can produce is typed here. Callers
    never pre-validate; the store reports the exact reason itself.
*/

use crate::core_store::model::ContentId;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur in the content store
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required field was empty
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The referenced content item does not exist
    #[error("Not found: content {0}")]
    NotFound(ContentId),

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

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Required-field validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The named field was empty or whitespace-only
    #[error("Missing required field: {0}")]
    EmptyField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound(ContentId(1700000000000));
        assert_eq!(err.to_string(), "Not found: content 1700000000000");
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: StoreError = ValidationError::EmptyField("title").into();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(err.to_string(), "Validation error: Missing required field: title");
    }

    #[test]
    fn test_corrupted_data_display() {
        let err = StoreError::CorruptedData {
            key: "contentData",
            reason: "expected value at line 1".to_string(),
        };
        assert!(err.to_string().contains("contentData"));
    }
}
