//! Shared fixtures for service tests.

use bookmark_shelf::{
    Bookmark, BookmarkId, BookmarkService, BookmarkStore, InMemoryStore, StoreError,
};

pub fn bookmark(id: u64, title: &str, url: &str) -> Bookmark {
    Bookmark {
        id: BookmarkId(id),
        title: title.into(),
        url: url.into(),
        category: "Misc".into(),
        description: format!("{} description", title),
        date_added: "2024-01-15".into(),
    }
}

/// Service over a document that already holds `collection`.
pub fn service_with(collection: Vec<Bookmark>) -> BookmarkService<InMemoryStore> {
    BookmarkService::new(InMemoryStore::with_collection(collection).unwrap())
}

pub fn empty_service() -> BookmarkService<InMemoryStore> {
    service_with(Vec::new())
}

/// A store whose writes always fail.
pub struct ReadOnlyStore;

impl BookmarkStore for ReadOnlyStore {
    fn initialize(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn read_all(&self) -> Vec<Bookmark> {
        vec![bookmark(1, "A", "https://a.test")]
    }

    fn write_all(&self, _collection: &[Bookmark]) -> Result<(), StoreError> {
        Err(StoreError::Io("read-only filesystem".into()))
    }
}
