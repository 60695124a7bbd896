//! HTTP implementation of [`BookmarkApi`] over reqwest.
//!
//! Requires the `client` feature.

use reqwest::header::CONTENT_DISPOSITION;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::api::{BookmarkApi, ClientError, ErrorBody};
use crate::bookmark::{today, Bookmark, BookmarkDraft, BookmarkId, ImportRecord};
use crate::service::{export_filename, Export, ImportSummary, StatusMessage};

/// Talks to a running bookmark API at `base_url` (e.g. `http://127.0.0.1:3001`).
#[derive(Debug, Clone)]
pub struct HttpBookmarkApi {
    client: Client,
    base_url: String,
}

impl HttpBookmarkApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/bookmarks{}", self.base_url, path)
    }
}

/// Decode a success body, or turn an error status into `ClientError::Http`.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        return Err(ClientError::Http {
            status: status.as_u16(),
            message,
        });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

/// Pull `filename="..."` out of a `Content-Disposition` value.
fn disposition_filename(value: &str) -> Option<String> {
    let (_, rest) = value.split_once("filename=")?;
    let name = rest.split(';').next()?.trim().trim_matches('"');
    (!name.is_empty()).then(|| name.to_string())
}

impl BookmarkApi for HttpBookmarkApi {
    async fn list(&self) -> Result<Vec<Bookmark>, ClientError> {
        let resp = self.client.get(self.url("")).send().await.map_err(transport)?;
        decode(resp).await
    }

    async fn create(&self, draft: &BookmarkDraft) -> Result<Bookmark, ClientError> {
        let resp = self
            .client
            .post(self.url(""))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn update(
        &self,
        id: BookmarkId,
        draft: &BookmarkDraft,
    ) -> Result<Bookmark, ClientError> {
        let resp = self
            .client
            .put(self.url(&format!("/{}", id)))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn delete(&self, id: BookmarkId) -> Result<StatusMessage, ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/{}", id)))
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn clear(&self) -> Result<StatusMessage, ClientError> {
        let resp = self
            .client
            .delete(self.url(""))
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }

    async fn export(&self) -> Result<Export, ClientError> {
        let resp = self
            .client
            .get(self.url("/export"))
            .send()
            .await
            .map_err(transport)?;
        let filename = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(disposition_filename)
            .unwrap_or_else(|| export_filename(&today()));
        let bookmarks = decode(resp).await?;
        Ok(Export {
            filename,
            bookmarks,
        })
    }

    async fn import(&self, records: &[ImportRecord]) -> Result<ImportSummary, ClientError> {
        let resp = self
            .client
            .post(self.url("/import"))
            .json(&json!({ "bookmarks": records }))
            .send()
            .await
            .map_err(transport)?;
        decode(resp).await
    }
}
