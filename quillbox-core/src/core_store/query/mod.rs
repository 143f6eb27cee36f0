/*
    query - Read-only view layer over the content collection
*/

pub mod projection;

pub use projection::{project, CategoryFilter, ParseSortOrderError, QueryFilter, SortOrder};
