//! Controller driving a real server through `HttpBookmarkApi`.

use std::sync::Arc;

use bookmark_shelf::bookmark::today;
use bookmark_shelf::client::{BookmarkApi, ClientError, ClientState, HttpBookmarkApi};
use bookmark_shelf::service::http;
use bookmark_shelf::{Bookmark, BookmarkDraft, BookmarkId, BookmarkService, ImportRecord, InMemoryStore};

use crate::support::bookmark;

async fn start_server(collection: Vec<Bookmark>) -> String {
    let service = Arc::new(BookmarkService::new(
        InMemoryStore::with_collection(collection).unwrap(),
    ));
    let app = http::router(service);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn full_lifecycle_over_http() {
    let base = start_server(vec![bookmark(1, "Rust", "Development")]).await;
    let mut state = ClientState::new(HttpBookmarkApi::new(base));

    assert!(state.mount().await);
    assert_eq!(state.bookmarks().len(), 1);

    assert!(state.create(&BookmarkDraft::new("News", "https://news.test").with_category("News")).await);
    let created = state.bookmarks()[1].id;

    assert!(state.begin_edit(created));
    state.draft_mut().title = Some("Headlines".into());
    assert!(state.submit().await);
    assert_eq!(state.bookmarks()[1].title, "Headlines");

    assert!(state.delete(BookmarkId(1)).await);
    assert_eq!(state.bookmarks().len(), 1);

    let export = state.export().await.unwrap();
    assert_eq!(export.filename, format!("bookmarks-{}.json", today()));
    assert_eq!(export.bookmarks, state.bookmarks());

    assert!(state.clear_all().await);
    let records: Vec<ImportRecord> = export.bookmarks.into_iter().map(ImportRecord::from).collect();
    assert_eq!(state.import(&records).await, Some(1));
    assert_eq!(state.bookmarks()[0].title, "Headlines");
    assert_eq!(state.error(), None);
}

#[tokio::test]
async fn server_errors_carry_status_and_message() {
    let base = start_server(Vec::new()).await;
    let api = HttpBookmarkApi::new(base);

    let err = api.delete(BookmarkId(5)).await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Http {
            status: 404,
            message: "bookmark not found: 5".into()
        }
    );

    let err = api
        .update(BookmarkId(5), &BookmarkDraft::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Http { status: 400, .. }));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut state = ClientState::new(HttpBookmarkApi::new(format!("http://{addr}")));
    assert!(!state.mount().await);
    assert!(!state.is_loading());
    assert!(state.error().unwrap().starts_with("network error"));
}
