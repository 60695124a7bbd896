//! Store - persistence of the whole bookmark collection as one JSON document.
//!
//! The collection is the unit of persistence: callers read everything,
//! change it in memory, and write everything back. There is no locking
//! between a read and the write that follows it, so two interleaved
//! read-modify-write cycles lose one of the updates. Last writer wins.
//!
//! ## Backings
//!
//! - [`FileStore`] keeps the document on disk, pretty-printed.
//! - [`InMemoryStore`] keeps the same serialized bytes in memory, for tests.

mod file;
mod in_memory;
mod seed;

use std::fmt;

use tracing::warn;

use crate::bookmark::Bookmark;

pub use file::FileStore;
pub use in_memory::InMemoryStore;
pub use seed::seed_bookmarks;

/// Read-all / replace-all access to the persisted collection.
pub trait BookmarkStore: Send + Sync {
    /// Create the document with the seed collection if it is absent.
    ///
    /// Does nothing when a document already exists, even a malformed one.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Load the collection.
    ///
    /// A missing or unparseable document yields an empty collection and a
    /// logged warning; read failures are never propagated.
    fn read_all(&self) -> Vec<Bookmark>;

    /// Replace the persisted collection with `collection`.
    fn write_all(&self, collection: &[Bookmark]) -> Result<(), StoreError>;
}

/// Failure to write the backing document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Filesystem error.
    Io(String),
    /// Collection could not be serialized.
    Serialize(String),
    /// In-memory backing lock poisoned.
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "store io error: {}", msg),
            StoreError::Serialize(msg) => write!(f, "store serialization error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialize(err.to_string())
    }
}

/// Serialize a collection the way it is kept at rest: a pretty-printed array.
pub(crate) fn encode_collection(collection: &[Bookmark]) -> Result<Vec<u8>, StoreError> {
    Ok(serde_json::to_vec_pretty(collection)?)
}

/// Parse a stored document, degrading to an empty collection on any failure.
pub(crate) fn decode_collection(bytes: Option<&[u8]>, location: &str) -> Vec<Bookmark> {
    let Some(bytes) = bytes else {
        warn!(location, "bookmark document missing, using empty collection");
        return Vec::new();
    };
    match serde_json::from_slice(bytes) {
        Ok(collection) => collection,
        Err(e) => {
            warn!(location, error = %e, "bookmark document unreadable, using empty collection");
            Vec::new()
        }
    }
}
