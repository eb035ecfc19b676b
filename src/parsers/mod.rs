pub mod html;
pub mod text;

#[cfg(test)]
mod tests;

use crate::cache::SharedCache;
use crate::fetchers::FetchResult;
use crate::observer::HarvestObserver;
use crate::results::WordList;
use std::sync::Arc;

/// Turns fetched pages into paragraph fragments, memoized per URL
#[derive(Clone)]
pub struct Extractor {
    cache: SharedCache<String, Vec<String>>,
    observer: Arc<dyn HarvestObserver>,
}

impl Extractor {
    pub fn new(
        cache: SharedCache<String, Vec<String>>,
        observer: Arc<dyn HarvestObserver>,
    ) -> Self {
        Self { cache, observer }
    }

    /// Paragraph texts of the page fetched from `url`, in document order.
    ///
    /// A failed fetch yields no fragments.
    pub fn extract(&self, url: &str, fetched: &FetchResult) -> Vec<String> {
        let key = url.to_string();
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let fragments = match fetched {
            FetchResult::Content(html) => html::extract_paragraphs(html),
            FetchResult::Failure => {
                self.observer.content_missing(url);
                Vec::new()
            }
        };

        self.cache.put(key, fragments.clone());
        fragments
    }
}

/// Reduces text to alphabetic words; each step is memoized per input
#[derive(Clone)]
pub struct Normalizer {
    strip_cache: SharedCache<String, String>,
    filter_cache: SharedCache<String, String>,
}

impl Normalizer {
    pub fn new(
        strip_cache: SharedCache<String, String>,
        filter_cache: SharedCache<String, String>,
    ) -> Self {
        Self {
            strip_cache,
            filter_cache,
        }
    }

    /// Memoized [`text::strip_symbols`]
    pub fn strip(&self, input: &str) -> String {
        memoized(&self.strip_cache, input, text::strip_symbols)
    }

    /// Memoized [`text::filter_alphabetic`]
    pub fn filter(&self, input: &str) -> String {
        memoized(&self.filter_cache, input, text::filter_alphabetic)
    }

    /// Space-joined alphabetic words of `input`
    pub fn normalize(&self, input: &str) -> String {
        self.filter(&self.strip(input))
    }

    /// Alphabetic words of `input`, in order
    pub fn words(&self, input: &str) -> WordList {
        self.normalize(input)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

fn memoized(cache: &SharedCache<String, String>, input: &str, f: fn(&str) -> String) -> String {
    let key = input.to_string();
    if let Some(cached) = cache.get(&key) {
        return cached;
    }
    let output = f(input);
    cache.put(key, output.clone());
    output
}
