//! Bookmark records and the payloads that create them.
//!
//! A [`Bookmark`] is the only entity. Its `id` is a millisecond timestamp
//! assigned on creation and bumped forward until it is unique within the
//! collection (see [`IdGenerator`]). `dateAdded` is set once, as a UTC
//! `YYYY-MM-DD` string, and never changes afterwards.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a bookmark within the collection.
///
/// Always serialized as a JSON number. Deserializes from a number or a
/// numeric string so hand-edited documents still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BookmarkId(pub u64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for BookmarkId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(BookmarkId(n)),
            RawId::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

impl FromStr for BookmarkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(BookmarkId)
            .map_err(|_| format!("invalid bookmark id: {}", s))
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A saved link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub date_added: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a create or update request, and the client's form draft.
///
/// Every field is optional on the wire; `title` and `url` are checked for
/// presence by the service, not by deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BookmarkDraft {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `(title, url)` when both are present and non-empty.
    pub fn required_fields(&self) -> Option<(&str, &str)> {
        let title = self.title.as_deref().filter(|t| !t.is_empty())?;
        let url = self.url.as_deref().filter(|u| !u.is_empty())?;
        Some((title, url))
    }
}

impl From<&Bookmark> for BookmarkDraft {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            title: Some(bookmark.title.clone()),
            url: Some(bookmark.url.clone()),
            category: Some(bookmark.category.clone()),
            description: Some(bookmark.description.clone()),
        }
    }
}

/// One element of an import payload. Any `id` in the input is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<String>,
}

impl From<Bookmark> for ImportRecord {
    fn from(bookmark: Bookmark) -> Self {
        Self {
            title: bookmark.title,
            url: bookmark.url,
            category: Some(bookmark.category),
            description: Some(bookmark.description),
            date_added: Some(bookmark.date_added),
        }
    }
}

/// Hands out time-based ids that are unique within one collection.
///
/// The candidate is the current time in milliseconds; if it is already taken
/// (by a stored record or an id handed out earlier from this generator) it is
/// bumped by one until free.
pub struct IdGenerator {
    taken: HashSet<u64>,
}

impl IdGenerator {
    pub fn for_collection(collection: &[Bookmark]) -> Self {
        Self {
            taken: collection.iter().map(|b| b.id.0).collect(),
        }
    }

    /// Next id at or after `now + offset`.
    pub fn next_with_offset(&mut self, offset: u64) -> BookmarkId {
        self.next_from(now_millis().saturating_add(offset))
    }

    pub fn next(&mut self) -> BookmarkId {
        self.next_with_offset(0)
    }

    pub fn next_from(&mut self, candidate: u64) -> BookmarkId {
        let mut id = candidate;
        while !self.taken.insert(id) {
            id = id.wrapping_add(1);
        }
        BookmarkId(id)
    }
}

/// Milliseconds since the UNIX epoch.
pub fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
