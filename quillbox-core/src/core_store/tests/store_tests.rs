/*
    store_tests.rs - End-to-end content store scenarios
*/

use crate::core_store::model::Category;
use crate::core_store::query::{project, CategoryFilter, QueryFilter, SortOrder};
use crate::core_store::store::{ContentStore, StoreError};
use crate::storage::MemoryBackend;
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

fn open_store() -> ContentStore {
    ContentStore::open(Arc::new(MemoryBackend::new())).unwrap()
}

#[test]
fn test_two_item_scenario_newest_and_category_filter() {
    let store = open_store();

    store
        .add_content("alice", "T1", "B1", Category::News)
        .unwrap();
    // The wall clock must advance between creations for a date-order check
    sleep(Duration::from_millis(5));
    store
        .add_content("alice", "T2", "B2", Category::Blog)
        .unwrap();

    let snapshot = store.snapshot().unwrap();

    let newest = project(
        &snapshot,
        &QueryFilter {
            search: String::new(),
            category: CategoryFilter::All,
            sort: SortOrder::Newest,
        },
    );
    let titles: Vec<&str> = newest.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["T2", "T1"]);

    let blog_only = project(
        &snapshot,
        &QueryFilter {
            search: String::new(),
            category: CategoryFilter::Only(Category::Blog),
            sort: SortOrder::Newest,
        },
    );
    let titles: Vec<&str> = blog_only.iter().map(|item| item.title.as_str()).collect();
    assert_eq!(titles, vec!["T2"]);
}

#[test]
fn test_full_lifecycle() {
    let store = open_store();

    let item = store
        .add_content("alice", "Launch notes", "We shipped.", Category::News)
        .unwrap();
    store.add_comment(item.id, "bob", "congrats").unwrap();
    store.add_comment(item.id, "carol", "well done").unwrap();

    let edited = store
        .edit_content(item.id, "Launch notes v2", "We shipped, twice.", Category::Blog)
        .unwrap();
    assert_eq!(edited.comments.len(), 2);
    assert_eq!(edited.author, "alice");

    store.delete_content(item.id).unwrap();
    assert!(store.get(item.id).unwrap().is_none());

    let err = store
        .edit_content(item.id, "x", "y", Category::Misc)
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn test_stats_track_items_and_comments() {
    let store = open_store();

    let a = store
        .add_content("alice", "A", "aa", Category::News)
        .unwrap();
    let b = store
        .add_content("alice", "B", "bb", Category::Misc)
        .unwrap();
    store.add_comment(a.id, "bob", "1").unwrap();
    store.add_comment(b.id, "bob", "2").unwrap();
    store.add_comment(b.id, "bob", "3").unwrap();

    let stats = store.stats().unwrap();
    assert_eq!(stats.items_count, 2);
    assert_eq!(stats.comments_count, 3);
}
