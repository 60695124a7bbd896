//! The client's view of the bookmark API.

use std::fmt;
use std::sync::Arc;

use crate::bookmark::{Bookmark, BookmarkDraft, BookmarkId, ImportRecord};
use crate::service::{BookmarkService, Export, HandlerError, ImportSummary, StatusMessage};
use crate::store::BookmarkStore;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server answered with an error status.
    Http { status: u16, message: String },
    /// The request never completed.
    Transport(String),
    /// The response body was not what the API promises.
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Http { message, .. } => write!(f, "{}", message),
            ClientError::Transport(msg) => write!(f, "network error: {}", msg),
            ClientError::Decode(msg) => write!(f, "unexpected response: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<HandlerError> for ClientError {
    fn from(err: HandlerError) -> Self {
        ClientError::Http {
            status: err.status_code(),
            message: err.to_string(),
        }
    }
}

/// Error body returned by the server.
#[cfg(feature = "client")]
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}

/// Operations the client state controller issues.
#[allow(async_fn_in_trait)]
pub trait BookmarkApi {
    async fn list(&self) -> Result<Vec<Bookmark>, ClientError>;
    async fn create(&self, draft: &BookmarkDraft) -> Result<Bookmark, ClientError>;
    async fn update(&self, id: BookmarkId, draft: &BookmarkDraft)
        -> Result<Bookmark, ClientError>;
    async fn delete(&self, id: BookmarkId) -> Result<StatusMessage, ClientError>;
    async fn clear(&self) -> Result<StatusMessage, ClientError>;
    async fn export(&self) -> Result<Export, ClientError>;
    async fn import(&self, records: &[ImportRecord]) -> Result<ImportSummary, ClientError>;
}

/// Calls a [`BookmarkService`] in-process, with no transport in between.
pub struct LocalApi<S> {
    service: Arc<BookmarkService<S>>,
}

impl<S> LocalApi<S> {
    pub fn new(service: Arc<BookmarkService<S>>) -> Self {
        Self { service }
    }
}

impl<S> Clone for LocalApi<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: BookmarkStore> BookmarkApi for LocalApi<S> {
    async fn list(&self) -> Result<Vec<Bookmark>, ClientError> {
        Ok(self.service.list())
    }

    async fn create(&self, draft: &BookmarkDraft) -> Result<Bookmark, ClientError> {
        Ok(self.service.create(draft.clone())?)
    }

    async fn update(
        &self,
        id: BookmarkId,
        draft: &BookmarkDraft,
    ) -> Result<Bookmark, ClientError> {
        Ok(self.service.update(&id.to_string(), draft.clone())?)
    }

    async fn delete(&self, id: BookmarkId) -> Result<StatusMessage, ClientError> {
        Ok(self.service.delete(&id.to_string())?)
    }

    async fn clear(&self) -> Result<StatusMessage, ClientError> {
        Ok(self.service.clear()?)
    }

    async fn export(&self) -> Result<Export, ClientError> {
        Ok(self.service.export())
    }

    async fn import(&self, records: &[ImportRecord]) -> Result<ImportSummary, ClientError> {
        Ok(self.service.import_records(records.to_vec())?)
    }
}
