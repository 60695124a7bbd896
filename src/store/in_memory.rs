//! InMemoryStore - the serialized document held in memory.

use std::sync::{Arc, RwLock};

use tracing::{info, warn};

use super::{decode_collection, encode_collection, seed_bookmarks, BookmarkStore, StoreError};
use crate::bookmark::Bookmark;

/// In-memory stand-in for the backing file.
///
/// Holds the same bytes a [`FileStore`](super::FileStore) would write, so
/// missing and malformed documents behave identically. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryStore {
    document: Arc<RwLock<Option<Vec<u8>>>>,
    seed: Vec<Bookmark>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// A store with no document yet. `initialize` will seed it.
    pub fn new() -> Self {
        Self {
            document: Arc::new(RwLock::new(None)),
            seed: seed_bookmarks(),
        }
    }

    /// A store whose document already holds `collection`.
    pub fn with_collection(collection: Vec<Bookmark>) -> Result<Self, StoreError> {
        let bytes = encode_collection(&collection)?;
        Ok(Self::with_document(bytes))
    }

    /// A store whose document holds exactly `bytes`, well-formed or not.
    pub fn with_document(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            document: Arc::new(RwLock::new(Some(bytes.into()))),
            seed: seed_bookmarks(),
        }
    }

    /// Replace the collection `initialize` writes into an absent document.
    pub fn with_seed(mut self, seed: Vec<Bookmark>) -> Self {
        self.seed = seed;
        self
    }

    /// Raw bytes of the current document, if any.
    pub fn document(&self) -> Option<Vec<u8>> {
        match self.document.read() {
            Ok(doc) => doc.clone(),
            Err(_) => None,
        }
    }
}

impl BookmarkStore for InMemoryStore {
    fn initialize(&self) -> Result<(), StoreError> {
        let mut doc = self
            .document
            .write()
            .map_err(|_| StoreError::LockPoisoned("initialize"))?;
        if doc.is_none() {
            *doc = Some(encode_collection(&self.seed)?);
            info!(count = self.seed.len(), "seeded in-memory bookmark document");
        }
        Ok(())
    }

    fn read_all(&self) -> Vec<Bookmark> {
        match self.document.read() {
            Ok(doc) => decode_collection(doc.as_deref(), "memory"),
            Err(_) => {
                warn!("in-memory bookmark document lock poisoned, using empty collection");
                Vec::new()
            }
        }
    }

    fn write_all(&self, collection: &[Bookmark]) -> Result<(), StoreError> {
        let bytes = encode_collection(collection)?;
        let mut doc = self
            .document
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        *doc = Some(bytes);
        Ok(())
    }
}
