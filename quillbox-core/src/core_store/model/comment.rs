/*
    comment.rs - Comment model

    A comment is append-only: once attached to a content item it is
    never edited or removed, and the sequence keeps insertion order.
*/

use super::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single comment on a content item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment id
    pub id: CommentId,

    /// Username of the commenter at the time of writing
    pub author: String,

    /// Comment text, never empty
    pub text: String,

    /// When the comment was written
    pub date: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: CommentId,
        author: impl Into<String>,
        text: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Comment {
            id,
            author: author.into(),
            text: text.into(),
            date,
        }
    }
}
