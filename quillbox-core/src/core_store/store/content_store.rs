/*
    content_store.rs - The content store

    Sole owner and mutator of the content item collection. Every mutation
    builds a new collection and swaps the shared handle (copy-on-write),
    so a reader holding an earlier snapshot never observes a partial
    change.

    Persistence after a mutation is best-effort: on failure the store
    logs a warning and the in-memory state stays authoritative for the
    rest of the session. Corrupted persisted state at open is a hard
    error so existing data is never silently clobbered.
*/

use crate::core_store::model::{
    Category, Comment, CommentId, ContentDraft, ContentId, ContentItem,
};
use crate::core_store::store::errors::{StoreError, StoreResult};
use crate::core_store::store::validate;
use crate::storage::{PersistencePort, StorageError, StorageKey};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Helper to convert poison errors into StoreError
fn handle_poison<T>(_err: PoisonError<T>) -> StoreError {
    StoreError::Storage(StorageError::Backend(
        "lock poisoned: a thread panicked while holding the lock".to_string(),
    ))
}

/// Counts reported by [`ContentStore::stats`]
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub items_count: usize,
    pub comments_count: usize,
}

/// The content store
pub struct ContentStore {
    /// Current collection; swapped wholesale on every mutation
    items: RwLock<Arc<Vec<ContentItem>>>,

    persistence: Arc<dyn PersistencePort>,

    /// Strictly monotonic id source, seeded past every persisted id
    id_clock: AtomicU64,
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("items", &self.items)
            .field("id_clock", &self.id_clock)
            .finish_non_exhaustive()
    }
}

impl ContentStore {
    /// Open the store, reading any persisted collection through the port.
    pub fn open(persistence: Arc<dyn PersistencePort>) -> StoreResult<Self> {
        let items: Vec<ContentItem> = match persistence.load(StorageKey::ContentData)? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|err| StoreError::CorruptedData {
                    key: StorageKey::ContentData.as_str(),
                    reason: err.to_string(),
                })?
            }
            None => Vec::new(),
        };

        let max_seen = items
            .iter()
            .flat_map(|item| {
                std::iter::once(item.id.as_u64())
                    .chain(item.comments.iter().map(|comment| comment.id.as_u64()))
            })
            .max()
            .unwrap_or(0);

        debug!(items = items.len(), "content store opened");

        Ok(ContentStore {
            items: RwLock::new(Arc::new(items)),
            persistence,
            id_clock: AtomicU64::new(max_seen),
        })
    }

    /// Cheap handle to the current immutable collection.
    ///
    /// The returned snapshot is never affected by later mutations.
    pub fn snapshot(&self) -> StoreResult<Arc<Vec<ContentItem>>> {
        Ok(self.items.read().map_err(handle_poison)?.clone())
    }

    /// Look up a single item by id
    pub fn get(&self, id: ContentId) -> StoreResult<Option<ContentItem>> {
        Ok(self.snapshot()?.iter().find(|item| item.id == id).cloned())
    }

    /// Create a new content item.
    ///
    /// Title and body must be non-empty. The new item gets a fresh
    /// monotonic id, the current time, and an empty comment sequence, and
    /// is appended newest-last; display order is the query view's job.
    /// A persisted draft, if any, is cleared on success.
    pub fn add_content(
        &self,
        author: &str,
        title: &str,
        body: &str,
        category: Category,
    ) -> StoreResult<ContentItem> {
        validate::require_text("title", title)?;
        validate::require_text("body", body)?;

        let item = ContentItem::new(
            ContentId(self.next_id()),
            title,
            body,
            category,
            author,
            Utc::now(),
        );

        let mut guard = self.items.write().map_err(handle_poison)?;
        let mut next = guard.as_ref().clone();
        next.push(item.clone());
        *guard = Arc::new(next);
        let snapshot = guard.clone();
        drop(guard);

        self.persist(&snapshot);
        if let Err(err) = self.clear_draft() {
            warn!(error = %err, "failed to clear draft after submit");
        }

        debug!(id = %item.id, category = %item.category, "content added");
        Ok(item)
    }

    /// Replace title, body, and category of an existing item.
    ///
    /// The item's id, author, and comment sequence are preserved
    /// untouched; the date is restamped to now.
    pub fn edit_content(
        &self,
        id: ContentId,
        title: &str,
        body: &str,
        category: Category,
    ) -> StoreResult<ContentItem> {
        validate::require_text("title", title)?;
        validate::require_text("body", body)?;

        let mut guard = self.items.write().map_err(handle_poison)?;
        let Some(current) = guard.iter().find(|item| item.id == id) else {
            return Err(StoreError::NotFound(id));
        };

        let mut edited = current.clone();
        edited.title = title.to_string();
        edited.body = body.to_string();
        edited.category = category;
        edited.date = Utc::now();

        let next: Vec<ContentItem> = guard
            .iter()
            .map(|item| if item.id == id { edited.clone() } else { item.clone() })
            .collect();
        *guard = Arc::new(next);
        let snapshot = guard.clone();
        drop(guard);

        self.persist(&snapshot);
        debug!(id = %id, "content edited");
        Ok(edited)
    }

    /// Remove the item with the given id.
    pub fn delete_content(&self, id: ContentId) -> StoreResult<()> {
        let mut guard = self.items.write().map_err(handle_poison)?;
        if !guard.iter().any(|item| item.id == id) {
            return Err(StoreError::NotFound(id));
        }

        let next: Vec<ContentItem> = guard
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect();
        *guard = Arc::new(next);
        let snapshot = guard.clone();
        drop(guard);

        self.persist(&snapshot);
        debug!(id = %id, "content deleted");
        Ok(())
    }

    /// Append a comment to the target item's sequence.
    ///
    /// Comments are append-only: existing comments are never altered and
    /// insertion order is kept.
    pub fn add_comment(&self, id: ContentId, author: &str, text: &str) -> StoreResult<Comment> {
        validate::require_text("comment", text)?;

        let mut guard = self.items.write().map_err(handle_poison)?;
        if !guard.iter().any(|item| item.id == id) {
            return Err(StoreError::NotFound(id));
        }

        let comment = Comment::new(CommentId(self.next_id()), author, text, Utc::now());

        let next: Vec<ContentItem> = guard
            .iter()
            .map(|item| {
                if item.id == id {
                    let mut updated = item.clone();
                    updated.comments.push(comment.clone());
                    updated
                } else {
                    item.clone()
                }
            })
            .collect();
        *guard = Arc::new(next);
        let snapshot = guard.clone();
        drop(guard);

        self.persist(&snapshot);
        debug!(id = %id, comment = %comment.id, "comment added");
        Ok(comment)
    }

    /// Persist the in-progress content form.
    pub fn save_draft(&self, draft: &ContentDraft) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(draft)?;
        self.persistence.save(StorageKey::ContentDraft, &json)?;
        Ok(())
    }

    /// Read the persisted draft, if any.
    pub fn load_draft(&self) -> StoreResult<Option<ContentDraft>> {
        match self.persistence.load(StorageKey::ContentDraft)? {
            Some(json) => serde_json::from_str(&json).map(Some).map_err(|err| {
                StoreError::CorruptedData {
                    key: StorageKey::ContentDraft.as_str(),
                    reason: err.to_string(),
                }
            }),
            None => Ok(None),
        }
    }

    /// Discard the persisted draft.
    pub fn clear_draft(&self) -> StoreResult<()> {
        self.persistence.remove(StorageKey::ContentDraft)?;
        Ok(())
    }

    /// Get store statistics
    pub fn stats(&self) -> StoreResult<StoreStats> {
        let snapshot = self.snapshot()?;
        Ok(StoreStats {
            items_count: snapshot.len(),
            comments_count: snapshot.iter().map(ContentItem::comment_count).sum(),
        })
    }

    /// Next id: wall-clock milliseconds, bumped past the last issued id
    /// when the clock has not advanced.
    fn next_id(&self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let prev = self
            .id_clock
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(prev + 1)
    }

    /// Best-effort save of the full collection after a mutation.
    fn persist(&self, items: &Arc<Vec<ContentItem>>) {
        let json = match serde_json::to_string_pretty(items.as_ref()) {
            Ok(json) => json,
            Err(err) => {
                warn!(error = %err, "failed to encode content for persistence");
                return;
            }
        };
        if let Err(err) = self.persistence.save(StorageKey::ContentData, &json) {
            warn!(error = %err, "failed to persist content; in-memory state remains authoritative");
        }
    }
}
