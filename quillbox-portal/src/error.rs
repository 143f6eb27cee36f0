use quillbox_core::core_identity::IdentityError;
use quillbox_core::core_store::StoreError;
use quillbox_core::storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortalError {
    /// The operation needs a session and none is active
    #[error("Not logged in")]
    Unauthenticated,

    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type PortalResult<T> = Result<T, PortalError>;
