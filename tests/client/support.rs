//! Fixtures for client tests.

use std::sync::Arc;

use bookmark_shelf::client::{BookmarkApi, ClientError, LocalApi};
use bookmark_shelf::{
    Bookmark, BookmarkDraft, BookmarkId, BookmarkService, Export, ImportRecord, ImportSummary,
    InMemoryStore, StatusMessage,
};

pub fn bookmark(id: u64, title: &str, category: &str) -> Bookmark {
    Bookmark {
        id: BookmarkId(id),
        title: title.into(),
        url: format!("https://{}.test", title.to_lowercase()),
        category: category.into(),
        description: String::new(),
        date_added: "2024-01-15".into(),
    }
}

pub fn local_api(collection: Vec<Bookmark>) -> LocalApi<InMemoryStore> {
    let store = InMemoryStore::with_collection(collection).unwrap();
    LocalApi::new(Arc::new(BookmarkService::new(store)))
}

/// An API whose every call fails at the network level.
pub struct OfflineApi;

fn offline<T>() -> Result<T, ClientError> {
    Err(ClientError::Transport("connection refused".into()))
}

impl BookmarkApi for OfflineApi {
    async fn list(&self) -> Result<Vec<Bookmark>, ClientError> {
        offline()
    }

    async fn create(&self, _draft: &BookmarkDraft) -> Result<Bookmark, ClientError> {
        offline()
    }

    async fn update(
        &self,
        _id: BookmarkId,
        _draft: &BookmarkDraft,
    ) -> Result<Bookmark, ClientError> {
        offline()
    }

    async fn delete(&self, _id: BookmarkId) -> Result<StatusMessage, ClientError> {
        offline()
    }

    async fn clear(&self) -> Result<StatusMessage, ClientError> {
        offline()
    }

    async fn export(&self) -> Result<Export, ClientError> {
        offline()
    }

    async fn import(&self, _records: &[ImportRecord]) -> Result<ImportSummary, ClientError> {
        offline()
    }
}
