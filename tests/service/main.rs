//! Bookmark service integration tests.
//!
//! Handlers run against an `InMemoryStore` so the persisted document can be
//! compared byte-for-byte before and after a failed call.

mod support;
mod scenarios;
