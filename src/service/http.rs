//! HTTP transport for the bookmark service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/bookmarks`: whole collection.
//! - `POST /api/bookmarks`: create; `201` with the new record.
//! - `PUT /api/bookmarks/:id`: update; `200` with the updated record.
//! - `DELETE /api/bookmarks/:id`: delete one.
//! - `DELETE /api/bookmarks`: clear all.
//! - `POST /api/bookmarks/import`: body `{ "bookmarks": [...] }`.
//! - `GET /api/bookmarks/export`: pretty-printed collection with a dated
//!   `Content-Disposition`.
//! - `GET /health`: `{ "ok": true, "count": n }`.
//!
//! Store access is synchronous, so every service call runs on tokio's
//! blocking pool. Errors are returned as `{ "error": "<message>" }` with the
//! status from [`HandlerError::status_code`].

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use super::{BookmarkService, HandlerError};
use crate::bookmark::BookmarkDraft;
use crate::store::{encode_collection, BookmarkStore};

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            warn!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Build an axum `Router` serving the bookmark API.
pub fn router<S: BookmarkStore + 'static>(service: Arc<BookmarkService<S>>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/bookmarks",
            get(list_handler).post(create_handler).delete(clear_handler),
        )
        .route("/api/bookmarks/export", get(export_handler))
        .route("/api/bookmarks/import", post(import_handler))
        .route(
            "/api/bookmarks/:id",
            put(update_handler).delete(delete_handler),
        )
        .layer(CorsLayer::permissive())
        .with_state(service)
}

/// Serve the API over HTTP at the given address (e.g. `"127.0.0.1:3001"`).
pub async fn serve<S: BookmarkStore + 'static>(
    service: Arc<BookmarkService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("bookmark API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}

/// Run `call` against the service on the blocking pool.
async fn blocking<S, T, F>(service: Arc<BookmarkService<S>>, call: F) -> Result<T, HandlerError>
where
    S: BookmarkStore + 'static,
    T: Send + 'static,
    F: FnOnce(&BookmarkService<S>) -> T + Send + 'static,
{
    tokio::task::spawn_blocking(move || call(&service))
        .await
        .map_err(|e| HandlerError::Internal(e.to_string()))
}

async fn health_handler<S: BookmarkStore + 'static>(
    State(service): State<Arc<BookmarkService<S>>>,
) -> Result<impl IntoResponse, HandlerError> {
    let count = blocking(service, |s| s.list().len()).await?;
    Ok(Json(json!({ "ok": true, "count": count })))
}

async fn list_handler<S: BookmarkStore + 'static>(
    State(service): State<Arc<BookmarkService<S>>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(blocking(service, |s| s.list()).await?))
}

async fn create_handler<S: BookmarkStore + 'static>(
    State(service): State<Arc<BookmarkService<S>>>,
    body: Result<Json<BookmarkDraft>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(draft) = body.map_err(|e| HandlerError::Validation(e.body_text()))?;
    let bookmark = blocking(service, move |s| s.create(draft)).await??;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

async fn update_handler<S: BookmarkStore + 'static>(
    State(service): State<Arc<BookmarkService<S>>>,
    Path(id): Path<String>,
    body: Result<Json<BookmarkDraft>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(draft) = body.map_err(|e| HandlerError::Validation(e.body_text()))?;
    let bookmark = blocking(service, move |s| s.update(&id, draft)).await??;
    Ok(Json(bookmark))
}

async fn delete_handler<S: BookmarkStore + 'static>(
    State(service): State<Arc<BookmarkService<S>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(blocking(service, move |s| s.delete(&id)).await??))
}

async fn clear_handler<S: BookmarkStore + 'static>(
    State(service): State<Arc<BookmarkService<S>>>,
) -> Result<impl IntoResponse, HandlerError> {
    Ok(Json(blocking(service, |s| s.clear()).await??))
}

async fn export_handler<S: BookmarkStore + 'static>(
    State(service): State<Arc<BookmarkService<S>>>,
) -> Result<impl IntoResponse, HandlerError> {
    let export = blocking(service, |s| s.export()).await?;
    let body = encode_collection(&export.bookmarks)?;
    let disposition = format!("attachment; filename=\"{}\"", export.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

async fn import_handler<S: BookmarkStore + 'static>(
    State(service): State<Arc<BookmarkService<S>>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, HandlerError> {
    let Json(payload) = body.map_err(|e| HandlerError::MalformedInput(e.body_text()))?;
    Ok(Json(blocking(service, move |s| s.import(payload)).await??))
}
