//! End-to-end handler scenarios.

use std::collections::HashSet;

use bookmark_shelf::bookmark::today;
use bookmark_shelf::{BookmarkDraft, HandlerError, InMemoryStore, BookmarkService, BookmarkStore};
use serde_json::json;

use crate::support::{bookmark, empty_service, service_with};

#[test]
fn create_into_empty_collection() {
    let service = empty_service();

    let created = service
        .create(BookmarkDraft::new("Example", "https://example.com"))
        .unwrap();

    let all = service.list();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Example");
    assert_eq!(all[0].url, "https://example.com");
    assert_eq!(all[0].id, created.id);
    assert_eq!(all[0].date_added, today());
}

#[test]
fn delete_first_of_two() {
    let a = bookmark(1, "A", "https://a.test");
    let b = bookmark(2, "B", "https://b.test");
    let service = service_with(vec![a, b.clone()]);

    let msg = service.delete("1").unwrap();
    assert_eq!(msg.message, "Bookmark deleted successfully");
    assert_eq!(service.list(), vec![b]);
}

#[test]
fn import_two_into_empty_collection() {
    let service = empty_service();

    let summary = service
        .import(json!({
            "bookmarks": [
                { "title": "X", "url": "https://x.test" },
                { "title": "Y", "url": "https://y.test" }
            ]
        }))
        .unwrap();
    assert_eq!(summary.count, 2);

    let all = service.list();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "X");
    assert_eq!(all[1].title, "Y");
    assert_ne!(all[0].id, all[1].id);
}

#[test]
fn create_without_title_leaves_collection_unchanged() {
    let service = service_with(vec![bookmark(1, "A", "https://a.test")]);
    let before = service.list();

    let draft: BookmarkDraft = serde_json::from_value(json!({ "url": "https://x.test" })).unwrap();
    let err = service.create(draft).unwrap_err();

    assert!(matches!(err, HandlerError::Validation(_)));
    assert_eq!(service.list(), before);
}

#[test]
fn first_start_seeds_then_crud_lifecycle() {
    let store = InMemoryStore::new();
    store.initialize().unwrap();
    let service = BookmarkService::new(store);
    let seeded = service.list();
    assert!(!seeded.is_empty());

    let created = service
        .create(BookmarkDraft::new("New", "https://new.test"))
        .unwrap();
    service
        .update(
            &created.id.to_string(),
            BookmarkDraft::new("Renamed", "https://new.test").with_category("Misc"),
        )
        .unwrap();
    service.delete(&seeded[0].id.to_string()).unwrap();

    let all = service.list();
    assert_eq!(all.len(), seeded.len());
    assert_eq!(all.last().unwrap().title, "Renamed");
    let ids: HashSet<_> = all.iter().map(|b| b.id).collect();
    assert!(!ids.contains(&seeded[0].id));
}

#[test]
fn interleaved_read_modify_write_loses_an_update() {
    // Two handlers that both read before either writes: last writer wins.
    let service = service_with(vec![bookmark(1, "A", "https://a.test")]);
    let store = service.store();

    let mut first = store.read_all();
    let mut second = store.read_all();
    first.push(bookmark(2, "B", "https://b.test"));
    second.push(bookmark(3, "C", "https://c.test"));
    store.write_all(&first).unwrap();
    store.write_all(&second).unwrap();

    let ids: Vec<u64> = service.list().iter().map(|b| b.id.0).collect();
    assert_eq!(ids, vec![1, 3]);
}
