/*
    types.rs - Common types for content models

    Defines:
    - Identifiers for content items and comments
    - The content category enum
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a content item.
///
/// Derived from the creation wall-clock in milliseconds and kept strictly
/// monotonic by the store's id clock, so two creations in the same
/// millisecond still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub u64);

impl ContentId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(ContentId)
    }
}

/// Unique identifier for a comment, timestamp-derived like [`ContentId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl CommentId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    News,
    Blog,
    Tutorial,
    Misc,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::News,
        Category::Blog,
        Category::Tutorial,
        Category::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::News => "NEWS",
            Category::Blog => "BLOG",
            Category::Tutorial => "TUTORIAL",
            Category::Misc => "MISC",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Misc
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: {0}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NEWS" => Ok(Category::News),
            "BLOG" => Ok(Category::Blog),
            "TUTORIAL" => Ok(Category::Tutorial),
            "MISC" => Ok(Category::Misc),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}
