//! Bookmark request handlers over a [`BookmarkStore`].
//!
//! Every mutating handler follows the same cycle: validate the input, read
//! the full collection, compute the new collection, write it back whole,
//! and return the affected record or a status message. Nothing is cached
//! between calls.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bookmark_shelf::{BookmarkDraft, BookmarkService, FileStore};
//!
//! let service = Arc::new(BookmarkService::new(FileStore::new("bookmarks.json")));
//! let created = service.create(BookmarkDraft::new("Example", "https://example.com"))?;
//!
//! // HTTP transport (requires "http" feature)
//! // bookmark_shelf::service::http::serve(service, "127.0.0.1:3001").await?;
//! ```

mod error;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::bookmark::{today, Bookmark, BookmarkDraft, BookmarkId, IdGenerator, ImportRecord};
use crate::store::BookmarkStore;

pub use error::HandlerError;

const MISSING_FIELDS: &str = "Title and URL are required";

/// Confirmation body for delete and clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of an import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub message: String,
    pub count: usize,
}

/// The collection as a downloadable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub filename: String,
    pub bookmarks: Vec<Bookmark>,
}

/// Suggested download name for an export taken on `date`.
pub fn export_filename(date: &str) -> String {
    format!("bookmarks-{}.json", date)
}

/// The API layer: one method per operation.
pub struct BookmarkService<S> {
    store: S,
}

impl<S: BookmarkStore> BookmarkService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The whole collection in insertion order.
    pub fn list(&self) -> Vec<Bookmark> {
        self.store.read_all()
    }

    /// Append a new bookmark with a fresh id and today's date.
    pub fn create(&self, draft: BookmarkDraft) -> Result<Bookmark, HandlerError> {
        let (title, url) = draft
            .required_fields()
            .ok_or_else(|| HandlerError::Validation(MISSING_FIELDS.into()))?;

        let mut collection = self.store.read_all();
        let id = IdGenerator::for_collection(&collection).next();
        let bookmark = Bookmark {
            id,
            title: title.to_string(),
            url: url.to_string(),
            category: draft.category.clone().unwrap_or_default(),
            description: draft.description.clone().unwrap_or_default(),
            date_added: today(),
        };
        collection.push(bookmark.clone());
        self.store.write_all(&collection)?;

        debug!(id = %bookmark.id, "bookmark created");
        Ok(bookmark)
    }

    /// Replace every field but `id` and `dateAdded` on the matching record.
    ///
    /// Absent `category`/`description` become empty strings.
    pub fn update(&self, id: &str, draft: BookmarkDraft) -> Result<Bookmark, HandlerError> {
        let (title, url) = draft
            .required_fields()
            .ok_or_else(|| HandlerError::Validation(MISSING_FIELDS.into()))?;

        let mut collection = self.store.read_all();
        let index = find_index(&collection, id)?;
        let existing = &mut collection[index];
        existing.title = title.to_string();
        existing.url = url.to_string();
        existing.category = draft.category.clone().unwrap_or_default();
        existing.description = draft.description.clone().unwrap_or_default();
        let updated = existing.clone();
        self.store.write_all(&collection)?;

        debug!(id = %updated.id, "bookmark updated");
        Ok(updated)
    }

    /// Remove the matching record.
    pub fn delete(&self, id: &str) -> Result<StatusMessage, HandlerError> {
        let mut collection = self.store.read_all();
        let index = find_index(&collection, id)?;
        let removed = collection.remove(index);
        self.store.write_all(&collection)?;

        debug!(id = %removed.id, "bookmark deleted");
        Ok(StatusMessage::new("Bookmark deleted successfully"))
    }

    /// Replace the collection with an empty one.
    pub fn clear(&self) -> Result<StatusMessage, HandlerError> {
        self.store.write_all(&[])?;
        debug!("all bookmarks cleared");
        Ok(StatusMessage::new("All bookmarks cleared successfully"))
    }

    /// The whole collection plus a dated download name.
    pub fn export(&self) -> Export {
        Export {
            filename: export_filename(&today()),
            bookmarks: self.store.read_all(),
        }
    }

    /// Import from a `{ "bookmarks": [...] }` request body.
    pub fn import(&self, payload: Value) -> Result<ImportSummary, HandlerError> {
        let records = match payload {
            Value::Object(mut body) => body.remove("bookmarks"),
            _ => None,
        };
        let Some(Value::Array(items)) = records else {
            return Err(HandlerError::MalformedInput(
                "Invalid data format. Expected an array of bookmarks.".into(),
            ));
        };
        let records = items
            .into_iter()
            .map(serde_json::from_value::<ImportRecord>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| HandlerError::MalformedInput(format!("invalid bookmark record: {}", e)))?;
        self.import_records(records)
    }

    /// Append `records`, each with a fresh id; supplied ids are discarded.
    pub fn import_records(&self, records: Vec<ImportRecord>) -> Result<ImportSummary, HandlerError> {
        let mut collection = self.store.read_all();
        let mut ids = IdGenerator::for_collection(&collection);
        let date = today();
        let count = records.len();

        for (offset, record) in records.into_iter().enumerate() {
            collection.push(Bookmark {
                id: ids.next_with_offset(offset as u64),
                title: record.title,
                url: record.url,
                category: record.category.unwrap_or_default(),
                description: record.description.unwrap_or_default(),
                date_added: record.date_added.unwrap_or_else(|| date.clone()),
            });
        }
        self.store.write_all(&collection)?;

        debug!(count, "bookmarks imported");
        Ok(ImportSummary {
            message: format!("Successfully imported {} bookmarks", count),
            count,
        })
    }
}

fn find_index(collection: &[Bookmark], id: &str) -> Result<usize, HandlerError> {
    let not_found = || HandlerError::NotFound(id.to_string());
    let id: BookmarkId = id.parse().map_err(|_| not_found())?;
    collection
        .iter()
        .position(|b| b.id == id)
        .ok_or_else(not_found)
}

#[cfg(feature = "http")]
pub mod http;
