//! Quillbox core: a local-first content-management state layer.
//!
//! Holds the credential store, the copy-on-write content store with
//! append-only comments, the pure query projection, and the JSON
//! key-value persistence seam they both write through.

pub mod config;
pub mod core_identity;
pub mod core_store;
pub mod logging;
pub mod storage;

pub use config::Config;
pub use logging::LogLevel;
