//! Personal bookmark manager.
//!
//! A flat JSON document holds the whole collection ([`store`]), a set of
//! stateless handlers implements CRUD plus import/export on top of it
//! ([`service`], served over HTTP with the `http` feature), and [`client`]
//! holds the UI-side state controller that mirrors the collection.

pub mod bookmark;
pub mod client;
pub mod service;
pub mod store;

#[cfg(feature = "http")]
pub mod config;

pub use bookmark::{Bookmark, BookmarkDraft, BookmarkId, IdGenerator, ImportRecord};
pub use service::{BookmarkService, Export, HandlerError, ImportSummary, StatusMessage};
pub use store::{BookmarkStore, FileStore, InMemoryStore, StoreError};

#[cfg(feature = "http")]
pub use config::ServerConfig;
