//! Error types for bookmark request handlers.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// Error type for handler operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// A required field is missing or empty, or the body could not be decoded.
    Validation(String),
    /// No bookmark with this id.
    NotFound(String),
    /// Import payload is not a sequence of records.
    MalformedInput(String),
    /// Writing the backing document failed.
    Persistence(StoreError),
    /// The handler task did not run to completion.
    Internal(String),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::Validation(msg) => write!(f, "{}", msg),
            HandlerError::NotFound(id) => write!(f, "bookmark not found: {}", id),
            HandlerError::MalformedInput(msg) => write!(f, "{}", msg),
            HandlerError::Persistence(e) => write!(f, "failed to save bookmarks: {}", e),
            HandlerError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Persistence(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Persistence(err)
    }
}

impl HandlerError {
    /// Map this error to an HTTP status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::Validation(_) => 400,
            HandlerError::NotFound(_) => 404,
            HandlerError::MalformedInput(_) => 400,
            HandlerError::Persistence(_) => 500,
            HandlerError::Internal(_) => 500,
        }
    }
}
