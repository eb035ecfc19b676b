//! In-memory collaborators for tests; nothing here touches the network.

use crate::error::{HarvestError, Result};
use crate::fetchers::PageSource;
use crate::observer::HarvestObserver;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

enum Script {
    Page { body: String, delay: Duration },
    Flaky { failures: usize, body: String },
    Hang,
    Panic,
}

/// A [`PageSource`] answering from a fixed script and counting calls.
///
/// URLs that are not scripted behave as unreachable.
pub(crate) struct ScriptedSource {
    scripts: HashMap<String, Script>,
    calls: Mutex<HashMap<String, usize>>,
    total: AtomicUsize,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ScriptedSource {
    pub(crate) fn new() -> Self {
        Self {
            scripts: HashMap::new(),
            calls: Mutex::new(HashMap::new()),
            total: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    pub(crate) fn page(self, url: &str, body: &str) -> Self {
        self.slow_page(url, body, Duration::ZERO)
    }

    pub(crate) fn slow_page(mut self, url: &str, body: &str, delay: Duration) -> Self {
        self.scripts.insert(
            url.to_string(),
            Script::Page {
                body: body.to_string(),
                delay,
            },
        );
        self
    }

    /// Fails `failures` times, then serves `body`
    pub(crate) fn flaky(mut self, url: &str, failures: usize, body: &str) -> Self {
        self.scripts.insert(
            url.to_string(),
            Script::Flaky {
                failures,
                body: body.to_string(),
            },
        );
        self
    }

    /// Never answers
    pub(crate) fn hanging(mut self, url: &str) -> Self {
        self.scripts.insert(url.to_string(), Script::Hang);
        self
    }

    /// Panics when requested
    pub(crate) fn panicking(mut self, url: &str) -> Self {
        self.scripts.insert(url.to_string(), Script::Panic);
        self
    }

    pub(crate) fn calls(&self, url: &str) -> usize {
        self.calls.lock().unwrap().get(url).copied().unwrap_or(0)
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    /// Most requests that were ever in progress at the same time
    pub(crate) fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    fn record(&self, url: &str) -> usize {
        self.total.fetch_add(1, Ordering::SeqCst);
        let mut calls = self.calls.lock().unwrap();
        let count = calls.entry(url.to_string()).or_insert(0);
        *count += 1;
        *count
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    async fn get(&self, url: &str, _timeout: Duration) -> Result<String> {
        let call = self.record(url);

        match self.scripts.get(url) {
            Some(Script::Page { body, delay }) => {
                let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                self.peak.fetch_max(now, Ordering::SeqCst);
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                self.in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok(body.clone())
            }
            Some(Script::Flaky { failures, body }) if call > *failures => Ok(body.clone()),
            Some(Script::Flaky { .. }) => Err(HarvestError::HttpStatus {
                url: url.to_string(),
                status: 503,
            }),
            Some(Script::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(HarvestError::Timeout(url.to_string()))
            }
            Some(Script::Panic) => panic!("scripted panic for {}", url),
            None => Err(HarvestError::Fetch {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

/// Observer that keeps every event for later assertions
#[derive(Default)]
pub(crate) struct RecordingObserver {
    attempts: Mutex<Vec<(usize, usize)>>,
    exhausted: Mutex<Vec<String>>,
    missing: Mutex<Vec<String>>,
    failed: Mutex<Vec<String>>,
    completed: Mutex<Vec<(usize, usize)>>,
}

impl RecordingObserver {
    /// `(attempt, max_retries)` pairs in the order they were reported
    pub(crate) fn failed_attempts(&self) -> Vec<(usize, usize)> {
        self.attempts.lock().unwrap().clone()
    }

    pub(crate) fn exhausted(&self) -> Vec<String> {
        self.exhausted.lock().unwrap().clone()
    }

    pub(crate) fn missing(&self) -> Vec<String> {
        self.missing.lock().unwrap().clone()
    }

    pub(crate) fn failed(&self) -> Vec<String> {
        self.failed.lock().unwrap().clone()
    }

    /// `(completed, total)` pairs in the order they were reported
    pub(crate) fn completed(&self) -> Vec<(usize, usize)> {
        self.completed.lock().unwrap().clone()
    }
}

impl HarvestObserver for RecordingObserver {
    fn fetch_attempt_failed(
        &self,
        _url: &str,
        attempt: usize,
        max_retries: usize,
        _error: &dyn fmt::Display,
    ) {
        self.attempts.lock().unwrap().push((attempt, max_retries));
    }

    fn fetch_exhausted(&self, url: &str) {
        self.exhausted.lock().unwrap().push(url.to_string());
    }

    fn content_missing(&self, url: &str) {
        self.missing.lock().unwrap().push(url.to_string());
    }

    fn url_failed(&self, url: &str, _error: &dyn fmt::Display) {
        self.failed.lock().unwrap().push(url.to_string());
    }

    fn url_completed(&self, _url: &str, completed: usize, total: usize) {
        self.completed.lock().unwrap().push((completed, total));
    }
}
