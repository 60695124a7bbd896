//! FileStore - the collection as a pretty-printed JSON file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use super::{decode_collection, encode_collection, seed_bookmarks, BookmarkStore, StoreError};
use crate::bookmark::Bookmark;

/// File-backed store at a fixed path.
///
/// Each write goes to its own temp file in the document's directory, which is
/// then renamed over the document, so a reader never sees a half-written
/// file. There is still no locking: concurrent writers race and the last
/// rename wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    seed: Vec<Bookmark>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed: seed_bookmarks(),
        }
    }

    /// Replace the collection `initialize` writes into an absent document.
    pub fn with_seed(mut self, seed: Vec<Bookmark>) -> Self {
        self.seed = seed;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn replace_document(&self, bytes: &[u8]) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(bytes)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl BookmarkStore for FileStore {
    fn initialize(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        let bytes = encode_collection(&self.seed)?;
        self.replace_document(&bytes)?;
        info!(
            path = %self.path.display(),
            count = self.seed.len(),
            "created bookmark document"
        );
        Ok(())
    }

    fn read_all(&self) -> Vec<Bookmark> {
        let location = self.path.display().to_string();
        match fs::read(&self.path) {
            Ok(bytes) => decode_collection(Some(&bytes), &location),
            Err(e) if e.kind() == ErrorKind::NotFound => decode_collection(None, &location),
            Err(e) => {
                warn!(path = %location, error = %e, "failed to read bookmark document, using empty collection");
                Vec::new()
            }
        }
    }

    fn write_all(&self, collection: &[Bookmark]) -> Result<(), StoreError> {
        let bytes = encode_collection(collection)?;
        self.replace_document(&bytes)
    }
}
