/*
    store - Mutation layer of the content subsystem

    Exposes the content store itself plus its error and validation types.
*/

pub mod content_store;
pub mod errors;
pub mod validate;

pub use content_store::{ContentStore, StoreStats};
pub use errors::{StoreError, StoreResult, ValidationError};
