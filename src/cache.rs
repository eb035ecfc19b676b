//! Memoization caches for the pipeline stages
//!
//! Entries live for the lifetime of the process. Nothing is evicted or
//! refreshed, so a URL that failed once keeps failing from cache.

use crate::fetchers::FetchResult;
use crate::results::WordList;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

/// A key/value store wrapped around a pure stage function
pub trait Cache<K, V>: Send + Sync {
    /// Look up a previously computed value
    fn get(&self, key: &K) -> Option<V>;

    /// Store a computed value, replacing any previous one
    fn put(&self, key: K, value: V);

    /// Number of stored entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Unbounded in-memory cache
pub struct MemoryCache<K, V> {
    entries: RwLock<HashMap<K, V>>,
}

impl<K, V> MemoryCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// A fresh cache behind a shared trait object
    pub fn shared() -> SharedCache<K, V> {
        Arc::new(Self::new())
    }
}

impl<K, V> Default for MemoryCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().ok()?;
        entries.get(key).cloned()
    }

    fn put(&self, key: K, value: V) {
        // Concurrent writers for the same key compute the same value,
        // so last write wins.
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key, value);
            }
            Err(_) => ::log::warn!("Cache lock poisoned, dropping entry"),
        }
    }

    fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }
}

/// Cache that never stores anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl<K, V> Cache<K, V> for NoCache {
    fn get(&self, _key: &K) -> Option<V> {
        None
    }

    fn put(&self, _key: K, _value: V) {}

    fn len(&self) -> usize {
        0
    }
}

pub type SharedCache<K, V> = Arc<dyn Cache<K, V>>;

/// One cache per pipeline stage
#[derive(Clone)]
pub struct StageCaches {
    /// URL to fetched content
    pub fetch: SharedCache<String, FetchResult>,
    /// URL to paragraph fragments (empty when the fetch failed)
    pub extract: SharedCache<String, Vec<String>>,
    /// Text to text with symbols stripped
    pub strip: SharedCache<String, String>,
    /// Text to space-joined alphabetic tokens
    pub filter: SharedCache<String, String>,
    /// URL to the final word list
    pub process: SharedCache<String, WordList>,
}

impl StageCaches {
    /// Fresh in-memory caches for every stage
    pub fn in_memory() -> Self {
        Self {
            fetch: MemoryCache::shared(),
            extract: MemoryCache::shared(),
            strip: MemoryCache::shared(),
            filter: MemoryCache::shared(),
            process: MemoryCache::shared(),
        }
    }

    /// Caches that never remember anything
    pub fn disabled() -> Self {
        Self {
            fetch: Arc::new(NoCache),
            extract: Arc::new(NoCache),
            strip: Arc::new(NoCache),
            filter: Arc::new(NoCache),
            process: Arc::new(NoCache),
        }
    }
}

impl Default for StageCaches {
    fn default() -> Self {
        Self::in_memory()
    }
}
