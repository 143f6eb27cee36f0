use std::sync::Arc;

use quillbox_core::config::Config;
use quillbox_core::core_identity::CredentialStore;
use quillbox_core::core_store::ContentStore;
use quillbox_core::storage::{JsonFileBackend, PersistencePort};
use tracing::debug;

use crate::error::PortalResult;
use crate::services::{AuthService, ContentService};

/// One handle over everything a presentation layer needs.
pub struct Portal {
    pub auth: AuthService,
    pub content: ContentService,
}

impl Portal {
    /// Open a portal over the file-backed store described by `config`.
    pub fn open(config: &Config) -> PortalResult<Self> {
        let backend: Arc<dyn PersistencePort> =
            Arc::new(JsonFileBackend::open(config.store.data_dir.clone())?);
        debug!(data_dir = %config.store.data_dir.display(), "portal opened");
        Self::with_backend(backend)
    }

    /// Open a portal over an arbitrary persistence backend.
    pub fn with_backend(backend: Arc<dyn PersistencePort>) -> PortalResult<Self> {
        let credentials = Arc::new(CredentialStore::open(backend.clone())?);
        let content = Arc::new(ContentStore::open(backend)?);

        Ok(Portal {
            auth: AuthService::new(credentials.clone()),
            content: ContentService::new(credentials, content),
        })
    }
}
