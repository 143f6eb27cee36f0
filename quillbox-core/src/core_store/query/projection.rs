/*
    projection.rs - Filtered, sorted view of the content collection

    Pure function of (items, filter): never mutates the input, never
    touches the store, and identical inputs always produce identical
    output. Sorting is stable, so ties keep their stored order.
*/

use crate::core_store::model::{Category, ContentItem};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Category filter: everything, or one exact category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    fn matches(&self, item: &ContentItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = crate::core_store::model::ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse::<Category>().map(CategoryFilter::Only)
        }
    }
}

/// Display order of the projected sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Descending by date
    Newest,
    /// Ascending by date
    Oldest,
    /// Case-folded title, ascending
    TitleAsc,
    /// Case-folded title, descending
    TitleDesc,
    /// Keep stored order
    Unsorted,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Newest
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::TitleAsc => "title-asc",
            SortOrder::TitleDesc => "title-desc",
            SortOrder::Unsorted => "unsorted",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown sort order name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown sort order: {0}")]
pub struct ParseSortOrderError(pub String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "title-asc" | "titleasc" => Ok(SortOrder::TitleAsc),
            "title-desc" | "titledesc" => Ok(SortOrder::TitleDesc),
            "unsorted" => Ok(SortOrder::Unsorted),
            other => Err(ParseSortOrderError(other.to_string())),
        }
    }
}

/// Criteria for one projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilter {
    /// Case-insensitive substring matched against title or body;
    /// empty keeps everything
    pub search: String,

    pub category: CategoryFilter,

    pub sort: SortOrder,
}

/// Compute the display projection of `items` under `filter`.
pub fn project(items: &[ContentItem], filter: &QueryFilter) -> Vec<ContentItem> {
    let needle = filter.search.to_lowercase();

    let mut view: Vec<ContentItem> = items
        .iter()
        .filter(|item| matches_search(item, &needle) && filter.category.matches(item))
        .cloned()
        .collect();

    match filter.sort {
        SortOrder::Newest => view.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Oldest => view.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::TitleAsc => view.sort_by(|a, b| cmp_titles(&a.title, &b.title)),
        SortOrder::TitleDesc => view.sort_by(|a, b| cmp_titles(&b.title, &a.title)),
        SortOrder::Unsorted => {}
    }

    view
}

fn matches_search(item: &ContentItem, needle: &str) -> bool {
    needle.is_empty()
        || item.title.to_lowercase().contains(needle)
        || item.body.to_lowercase().contains(needle)
}

/// Case-folded comparison with the raw title as tiebreak, so the order is
/// total whenever two titles differ at all.
fn cmp_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
