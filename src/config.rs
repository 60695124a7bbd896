//! Server configuration from command-line flags and environment variables.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// Bookmark API server settings. Every flag can also be set from the
/// environment.
#[derive(Parser, Debug, Clone)]
#[command(name = "bookmark-shelf")]
#[command(about = "Personal bookmark manager API backed by a JSON file", long_about = None)]
pub struct ServerConfig {
    /// Path of the JSON document holding the collection
    #[arg(long, env = "BOOKMARKS_DATA_FILE", default_value = "bookmarks.json")]
    pub data_file: PathBuf,

    /// Interface to bind
    #[arg(long, env = "BOOKMARKS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "BOOKMARKS_PORT", default_value_t = 3001)]
    pub port: u16,

    /// Maximum log level (trace, debug, info, warn, error)
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Create an empty document instead of the sample bookmarks
    #[arg(long, env = "BOOKMARKS_NO_SEED")]
    pub no_seed: bool,
}

impl ServerConfig {
    /// `host:port` to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parsed log level, `INFO` when unrecognized.
    pub fn log_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
