//! Bookmark API server binary.
//!
//! # Environment Variables
//!
//! - `BOOKMARKS_DATA_FILE`: path of the JSON document (default: bookmarks.json)
//! - `BOOKMARKS_HOST`: interface to bind (default: 127.0.0.1)
//! - `BOOKMARKS_PORT`: HTTP port (default: 3001)
//! - `BOOKMARKS_NO_SEED`: start an absent document empty instead of seeded
//! - `RUST_LOG`: log level (default: info)

use std::sync::Arc;

use bookmark_shelf::service::http;
use bookmark_shelf::{BookmarkService, BookmarkStore, FileStore, ServerConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(data_file = %config.data_file.display(), "starting bookmark API");

    let mut store = FileStore::new(&config.data_file);
    if config.no_seed {
        store = store.with_seed(Vec::new());
    }
    store.initialize()?;

    let service = Arc::new(BookmarkService::new(store));
    http::serve(service, &config.addr()).await?;
    Ok(())
}
