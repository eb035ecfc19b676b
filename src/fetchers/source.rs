use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Somewhere page content can be requested from.
///
/// One call is one attempt; retrying and memoization are layered on top by
/// [`ContentFetcher`](super::ContentFetcher).
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Request the raw content behind `url`, giving up after `timeout`
    async fn get(&self, url: &str, timeout: Duration) -> Result<String>;
}
