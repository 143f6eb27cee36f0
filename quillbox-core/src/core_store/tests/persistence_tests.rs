/*
    persistence_tests.rs - File-backed persistence and recovery

    Validates that a store reopened over the same data directory sees
    exactly the state the previous instance committed, and that the
    durable layout matches the documented key-per-file JSON shape.
*/

use crate::core_store::model::{Category, ContentDraft};
use crate::core_store::store::ContentStore;
use crate::storage::{JsonFileBackend, PersistencePort, StorageKey};
use std::sync::Arc;
use tempfile::tempdir;

#[test]
fn test_content_survives_reopen() {
    let dir = tempdir().unwrap();

    let first_id = {
        let backend = Arc::new(JsonFileBackend::open(dir.path()).unwrap());
        let store = ContentStore::open(backend).unwrap();
        let item = store
            .add_content("alice", "Durable", "still here after restart", Category::News)
            .unwrap();
        store.add_comment(item.id, "bob", "checking in").unwrap();
        item.id
    };

    let backend = Arc::new(JsonFileBackend::open(dir.path()).unwrap());
    let store = ContentStore::open(backend).unwrap();

    let item = store.get(first_id).unwrap().unwrap();
    assert_eq!(item.title, "Durable");
    assert_eq!(item.comment_count(), 1);
    assert_eq!(item.comments[0].author, "bob");
}

#[test]
fn test_deletion_is_durable() {
    let dir = tempdir().unwrap();

    let id = {
        let backend = Arc::new(JsonFileBackend::open(dir.path()).unwrap());
        let store = ContentStore::open(backend).unwrap();
        let keep = store
            .add_content("alice", "Keep", "b", Category::Blog)
            .unwrap();
        let drop = store
            .add_content("alice", "Drop", "b", Category::Blog)
            .unwrap();
        store.delete_content(drop.id).unwrap();
        keep.id
    };

    let backend = Arc::new(JsonFileBackend::open(dir.path()).unwrap());
    let store = ContentStore::open(backend).unwrap();
    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id, id);
}

#[test]
fn test_draft_survives_reopen_and_submit_clears_it() {
    let dir = tempdir().unwrap();

    {
        let backend = Arc::new(JsonFileBackend::open(dir.path()).unwrap());
        let store = ContentStore::open(backend).unwrap();
        store
            .save_draft(&ContentDraft {
                title: "half".to_string(),
                body: "written".to_string(),
                category: Some(Category::Tutorial),
            })
            .unwrap();
    }

    let backend = Arc::new(JsonFileBackend::open(dir.path()).unwrap());
    let store = ContentStore::open(backend.clone()).unwrap();
    let draft = store.load_draft().unwrap().unwrap();
    assert_eq!(draft.title, "half");

    store
        .add_content("alice", &draft.title, &draft.body, Category::Tutorial)
        .unwrap();
    assert!(store.load_draft().unwrap().is_none());
    assert!(backend.load(StorageKey::ContentDraft).unwrap().is_none());
}

#[test]
fn test_durable_layout_is_json_under_content_data_key() {
    let dir = tempdir().unwrap();
    let backend = Arc::new(JsonFileBackend::open(dir.path()).unwrap());
    let store = ContentStore::open(backend.clone()).unwrap();

    store
        .add_content("alice", "Shape check", "b", Category::Misc)
        .unwrap();

    let raw = backend.load(StorageKey::ContentData).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let array = parsed.as_array().unwrap();
    assert_eq!(array.len(), 1);
    assert_eq!(array[0]["title"], "Shape check");
    assert_eq!(array[0]["category"], "MISC");
    assert!(array[0]["comments"].as_array().unwrap().is_empty());
}
