use std::sync::Arc;

use quillbox_core::core_identity::{CredentialStore, Session};
use quillbox_core::core_store::{
    project, Category, Comment, ContentDraft, ContentId, ContentItem, ContentStore, QueryFilter,
    StoreStats,
};
use tracing::debug;

use crate::error::{PortalError, PortalResult};

/// Content operations, with the author resolved from the current session
pub struct ContentService {
    credentials: Arc<CredentialStore>,
    content: Arc<ContentStore>,
}

impl ContentService {
    pub fn new(credentials: Arc<CredentialStore>, content: Arc<ContentStore>) -> Self {
        Self {
            credentials,
            content,
        }
    }

    fn require_session(&self) -> PortalResult<Session> {
        self.credentials
            .current_session()?
            .ok_or(PortalError::Unauthenticated)
    }

    /// Create an item authored by the current session user.
    pub fn create(&self, title: &str, body: &str, category: Category) -> PortalResult<ContentItem> {
        let session = self.require_session()?;
        let item = self
            .content
            .add_content(&session.username, title, body, category)?;
        debug!(id = %item.id, author = %session.username, "content created");
        Ok(item)
    }

    /// Replace title/body/category of an existing item.
    pub fn update(
        &self,
        id: ContentId,
        title: &str,
        body: &str,
        category: Category,
    ) -> PortalResult<ContentItem> {
        Ok(self.content.edit_content(id, title, body, category)?)
    }

    /// Delete an item.
    pub fn remove(&self, id: ContentId) -> PortalResult<()> {
        Ok(self.content.delete_content(id)?)
    }

    /// Comment on an item as the current session user.
    pub fn comment(&self, id: ContentId, text: &str) -> PortalResult<Comment> {
        let session = self.require_session()?;
        Ok(self.content.add_comment(id, &session.username, text)?)
    }

    /// The filtered, sorted projection of the current snapshot.
    pub fn browse(&self, filter: &QueryFilter) -> PortalResult<Vec<ContentItem>> {
        let snapshot = self.content.snapshot()?;
        Ok(project(&snapshot, filter))
    }

    /// Look up a single item.
    pub fn get(&self, id: ContentId) -> PortalResult<Option<ContentItem>> {
        Ok(self.content.get(id)?)
    }

    pub fn save_draft(&self, draft: &ContentDraft) -> PortalResult<()> {
        Ok(self.content.save_draft(draft)?)
    }

    pub fn load_draft(&self) -> PortalResult<Option<ContentDraft>> {
        Ok(self.content.load_draft()?)
    }

    pub fn clear_draft(&self) -> PortalResult<()> {
        Ok(self.content.clear_draft()?)
    }

    pub fn stats(&self) -> PortalResult<StoreStats> {
        Ok(self.content.stats()?)
    }
}
