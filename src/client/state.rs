//! ClientState - the browser-side controller mirroring the collection.

use tracing::debug;

use super::api::{BookmarkApi, ClientError};
use super::filter::{category_options, visible_bookmarks, ALL_CATEGORIES};
use crate::bookmark::{Bookmark, BookmarkDraft, BookmarkId, ImportRecord};
use crate::service::Export;

/// Mirror of the server collection plus the UI state around it.
///
/// The mirror only changes after the server confirms a mutation; a failed
/// call records its message in the single error slot and leaves everything
/// else as it was.
pub struct ClientState<A> {
    api: A,
    bookmarks: Vec<Bookmark>,
    search_term: String,
    selected_category: String,
    draft: BookmarkDraft,
    editing: Option<BookmarkId>,
    error: Option<String>,
    loading: bool,
}

impl<A: BookmarkApi> ClientState<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            bookmarks: Vec::new(),
            search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            draft: BookmarkDraft::default(),
            editing: None,
            error: None,
            loading: true,
        }
    }

    /// Initial load. `loading` is false afterwards whether or not it worked.
    pub async fn mount(&mut self) -> bool {
        self.reload().await
    }

    /// Replace the mirror with the server's collection.
    pub async fn reload(&mut self) -> bool {
        let result = self.api.list().await;
        self.loading = false;
        match result {
            Ok(bookmarks) => {
                self.bookmarks = bookmarks;
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// The mirror filtered by the current search term and category.
    pub fn visible(&self) -> Vec<&Bookmark> {
        visible_bookmarks(&self.bookmarks, &self.search_term, &self.selected_category)
    }

    pub fn categories(&self) -> Vec<String> {
        category_options(&self.bookmarks)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn draft(&self) -> &BookmarkDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut BookmarkDraft {
        &mut self.draft
    }

    pub fn editing(&self) -> Option<BookmarkId> {
        self.editing
    }

    /// Load the record with `id` into the draft and make it the edit target.
    pub fn begin_edit(&mut self, id: BookmarkId) -> bool {
        match self.bookmarks.iter().find(|b| b.id == id) {
            Some(bookmark) => {
                self.draft = BookmarkDraft::from(bookmark);
                self.editing = Some(id);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.draft = BookmarkDraft::default();
        self.editing = None;
    }

    /// Send the draft as an update to the edit target, or as a create.
    /// The draft is reset on success and kept on failure.
    pub async fn submit(&mut self) -> bool {
        let draft = self.draft.clone();
        let ok = match self.editing {
            Some(id) => self.update(id, &draft).await,
            None => self.create(&draft).await,
        };
        if ok {
            self.cancel_edit();
        }
        ok
    }

    /// Create on the server, then append the returned record.
    pub async fn create(&mut self, draft: &BookmarkDraft) -> bool {
        match self.api.create(draft).await {
            Ok(bookmark) => {
                debug!(id = %bookmark.id, "mirror: appended");
                self.bookmarks.push(bookmark);
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Update on the server, then replace the mirror entry with that id.
    pub async fn update(&mut self, id: BookmarkId, draft: &BookmarkDraft) -> bool {
        match self.api.update(id, draft).await {
            Ok(updated) => {
                if let Some(entry) = self.bookmarks.iter_mut().find(|b| b.id == id) {
                    *entry = updated;
                }
                true
            }
            Err(e) => self.fail(e),
        }
    }

    /// Delete on the server, then drop the mirror entry with that id.
    pub async fn delete(&mut self, id: BookmarkId) -> bool {
        match self.api.delete(id).await {
            Ok(_) => {
                self.bookmarks.retain(|b| b.id != id);
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub async fn clear_all(&mut self) -> bool {
        match self.api.clear().await {
            Ok(_) => {
                self.bookmarks.clear();
                true
            }
            Err(e) => self.fail(e),
        }
    }

    pub async fn export(&mut self) -> Option<Export> {
        match self.api.export().await {
            Ok(export) => Some(export),
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    /// Import on the server, then reload the whole mirror.
    /// Returns the imported count.
    pub async fn import(&mut self, records: &[ImportRecord]) -> Option<usize> {
        match self.api.import(records).await {
            Ok(summary) => {
                self.reload().await;
                Some(summary.count)
            }
            Err(e) => {
                self.fail(e);
                None
            }
        }
    }

    fn fail(&mut self, err: ClientError) -> bool {
        debug!(error = %err, "api call failed");
        self.error = Some(err.to_string());
        false
    }
}
