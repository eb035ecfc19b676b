// Re-export modules
pub mod cache;
pub mod config;
pub mod error;
pub mod fetchers;
pub mod observer;
pub mod output;
pub mod parsers;
pub mod pipeline;
pub mod results;
pub mod shard;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use error::{HarvestError, Result};
pub use fetchers::{FetchResult, HttpSource, PageSource};
pub use observer::{HarvestObserver, LogObserver};
pub use pipeline::{Harvester, aggregate};
pub use results::{HarvestReport, WordList};
pub use shard::ShardKey;

use cache::StageCaches;
use fetchers::ContentFetcher;
use parsers::{Extractor, Normalizer};
use std::sync::Arc;

/// Main builder for a [`Harvester`]
pub struct Harvest {
    config: HarvestConfig,
    source: Option<Arc<dyn PageSource>>,
    observer: Arc<dyn HarvestObserver>,
    caches: StageCaches,
}

impl Harvest {
    /// Create a builder with default settings, fetching over HTTP and logging
    /// through the `log` facade
    pub fn new() -> Self {
        Self {
            config: HarvestConfig::default(),
            source: None,
            observer: Arc::new(LogObserver),
            caches: StageCaches::in_memory(),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: HarvestConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config = HarvestConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self> {
        let config = HarvestConfig::from_json(json)?;
        Ok(self.with_config(config))
    }

    /// Set the number of concurrent workers
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.config.max_workers = max_workers;
        self
    }

    /// Set the number of fetch attempts per URL
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.config.max_retries = max_retries;
        self
    }

    /// Set the per-attempt timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Set the number of URLs per shard
    pub fn with_shard_size(mut self, shard_size: usize) -> Self {
        self.config.shard_size = shard_size;
        self
    }

    /// Fetch pages from `source` instead of over HTTP
    pub fn with_source(mut self, source: Arc<dyn PageSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Report pipeline events to `observer`
    pub fn with_observer(mut self, observer: Arc<dyn HarvestObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Use the given stage caches, e.g. to share them between harvesters
    pub fn with_caches(mut self, caches: StageCaches) -> Self {
        self.caches = caches;
        self
    }

    /// Disable memoization for every stage
    pub fn without_cache(self) -> Self {
        self.with_caches(StageCaches::disabled())
    }

    /// Configuration the pipeline will be built with
    pub fn config(&self) -> &HarvestConfig {
        &self.config
    }

    /// Assemble the pipeline
    pub fn build(self) -> Result<Harvester> {
        self.config.validate()?;

        let source = match self.source {
            Some(source) => source,
            None => Arc::new(HttpSource::new(&self.config.user_agent)?),
        };

        let fetcher = ContentFetcher::new(
            source,
            self.caches.fetch,
            Arc::clone(&self.observer),
            self.config.max_retries,
            self.config.timeout(),
        );
        let extractor = Extractor::new(self.caches.extract, Arc::clone(&self.observer));
        let normalizer = Normalizer::new(self.caches.strip, self.caches.filter);

        Ok(Harvester::new(
            fetcher,
            extractor,
            normalizer,
            self.caches.process,
            self.observer,
            self.config.max_workers,
            self.config.shard_size,
        ))
    }
}

impl Default for Harvest {
    fn default() -> Self {
        Self::new()
    }
}
