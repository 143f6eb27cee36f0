/*
    content.rs - Content item and draft models

    A content item is an authored piece of text with a category, a
    last-touched timestamp, and an append-only comment sequence.

    Invariants:
    - id is unique across all items for the lifetime of the store
    - author is a copy of the creating session's username, never updated
    - comments is never null; a persisted item missing the field
      deserializes with an empty sequence
*/

use super::comment::Comment;
use super::types::{Category, ContentId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single authored content item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Unique item id
    pub id: ContentId,

    /// Item title
    pub title: String,

    /// Item body text
    pub body: String,

    /// Assigned category
    pub category: Category,

    /// Creation time, restamped on every edit
    pub date: DateTime<Utc>,

    /// Username of the creator, immutable after creation
    pub author: String,

    /// Comments in insertion order
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl ContentItem {
    /// Create a new item with an empty comment sequence
    pub fn new(
        id: ContentId,
        title: impl Into<String>,
        body: impl Into<String>,
        category: Category,
        author: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        ContentItem {
            id,
            title: title.into(),
            body: body.into(),
            category,
            date,
            author: author.into(),
            comments: Vec::new(),
        }
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// An unsaved, in-progress content form.
///
/// Drafts are unvalidated: any field may be empty or absent. They exist so
/// a half-written item survives a process restart, and are cleared when the
/// item is actually created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentDraft {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub category: Option<Category>,
}

impl ContentDraft {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty() && self.category.is_none()
    }
}
