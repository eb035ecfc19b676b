//! Content fetching with bounded retry and memoization

pub mod http;
pub mod source;

pub use http::HttpSource;
pub use source::PageSource;

use crate::cache::SharedCache;
use crate::error::{HarvestError, Result};
use crate::observer::HarvestObserver;
use std::sync::Arc;
use std::time::Duration;

/// Outcome of fetching one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResult {
    /// Raw page content
    Content(String),
    /// Every attempt failed
    Failure,
}

impl FetchResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchResult::Failure)
    }
}

/// Fetches URLs from a [`PageSource`], retrying and caching results
#[derive(Clone)]
pub struct ContentFetcher {
    source: Arc<dyn PageSource>,
    cache: SharedCache<String, FetchResult>,
    observer: Arc<dyn HarvestObserver>,
    max_retries: usize,
    timeout: Duration,
}

impl ContentFetcher {
    pub fn new(
        source: Arc<dyn PageSource>,
        cache: SharedCache<String, FetchResult>,
        observer: Arc<dyn HarvestObserver>,
        max_retries: usize,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            cache,
            observer,
            max_retries,
            timeout,
        }
    }

    /// Fetch `url`, never failing: exhausted attempts yield [`FetchResult::Failure`].
    ///
    /// Results are cached for the lifetime of the process, failures included.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let key = url.to_string();
        if let Some(cached) = self.cache.get(&key) {
            ::log::trace!(target: "fetcher", "Cache hit for {}", url);
            return cached;
        }

        let result = self.fetch_with_retries(url).await;
        self.cache.put(key, result.clone());
        result
    }

    async fn fetch_with_retries(&self, url: &str) -> FetchResult {
        // At least one attempt, even if configured with zero
        let attempts = self.max_retries.max(1);

        for attempt in 1..=attempts {
            match self.attempt(url).await {
                Ok(body) => return FetchResult::Content(body),
                Err(e) => self.observer.fetch_attempt_failed(url, attempt, attempts, &e),
            }
        }

        self.observer.fetch_exhausted(url);
        FetchResult::Failure
    }

    /// A single request bounded by the configured timeout
    async fn attempt(&self, url: &str) -> Result<String> {
        match tokio::time::timeout(self.timeout, self.source.get(url, self.timeout)).await {
            Ok(result) => result,
            Err(_) => Err(HarvestError::Timeout(url.to_string())),
        }
    }
}
