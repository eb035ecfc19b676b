//! Observability hooks for the pipeline
//!
//! Every component reports through a [`HarvestObserver`] handed to it at
//! construction time. [`LogObserver`] forwards events to the `log` facade.

use std::fmt;

/// Receives pipeline events; every hook defaults to a no-op
pub trait HarvestObserver: Send + Sync {
    /// A single fetch attempt failed (`attempt` is 1-based)
    fn fetch_attempt_failed(
        &self,
        _url: &str,
        _attempt: usize,
        _max_retries: usize,
        _error: &dyn fmt::Display,
    ) {
    }

    /// All fetch attempts for a URL failed
    fn fetch_exhausted(&self, _url: &str) {}

    /// Extraction was asked for a URL whose fetch failed
    fn content_missing(&self, _url: &str) {}

    /// Processing a URL failed unexpectedly
    fn url_failed(&self, _url: &str, _error: &dyn fmt::Display) {}

    /// A URL finished processing, successfully or not
    fn url_completed(&self, _url: &str, _completed: usize, _total: usize) {}
}

/// Observer that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl HarvestObserver for SilentObserver {}

/// Observer that writes events through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl HarvestObserver for LogObserver {
    fn fetch_attempt_failed(
        &self,
        url: &str,
        attempt: usize,
        max_retries: usize,
        error: &dyn fmt::Display,
    ) {
        ::log::warn!(
            target: "fetcher",
            "Error fetching {}, Retry {}/{}: {}",
            url,
            attempt,
            max_retries,
            error
        );
    }

    fn fetch_exhausted(&self, url: &str) {
        ::log::debug!(target: "fetcher", "Giving up on {}", url);
    }

    fn content_missing(&self, url: &str) {
        ::log::error!(target: "extractor", "HTML content is missing for {}", url);
    }

    fn url_failed(&self, url: &str, error: &dyn fmt::Display) {
        ::log::error!(target: "pipeline", "Error processing {}: {}", url, error);
    }

    fn url_completed(&self, url: &str, completed: usize, total: usize) {
        ::log::debug!(target: "pipeline", "[{}/{}] {}", completed, total, url);
    }
}
