use thiserror::Error;

/// Errors surfaced by the harvesting pipeline
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("invalid shard key {0:?}: expected a single letter from 'a' to 'z'")]
    InvalidShardKey(String),

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("timeout fetching {0}")]
    Timeout(String),

    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HarvestError>;
