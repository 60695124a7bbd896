//! Client-side state for a bookmark UI.
//!
//! [`ClientState`] mirrors the server collection and mediates user actions
//! against a [`BookmarkApi`]. Filtering is a pure function of the mirror,
//! the search term and the selected category, so it is testable without
//! any UI framework.
//!
//! ## Example
//!
//! ```ignore
//! use bookmark_shelf::client::{ClientState, HttpBookmarkApi};
//!
//! let mut state = ClientState::new(HttpBookmarkApi::new("http://127.0.0.1:3001"));
//! state.mount().await;
//! state.set_search_term("rust");
//! for bookmark in state.visible() {
//!     println!("{} {}", bookmark.title, bookmark.url);
//! }
//! ```

mod api;
mod filter;
mod state;

pub use api::{BookmarkApi, ClientError, LocalApi};
pub use filter::{category_options, visible_bookmarks, ALL_CATEGORIES};
pub use state::ClientState;

// HTTP transport (requires "client" feature)
#[cfg(feature = "client")]
mod http;
#[cfg(feature = "client")]
pub use http::HttpBookmarkApi;
