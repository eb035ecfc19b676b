//! Per-URL pipeline and the bounded worker pool that runs it over a shard

use crate::cache::SharedCache;
use crate::fetchers::ContentFetcher;
use crate::observer::HarvestObserver;
use crate::parsers::{Extractor, Normalizer};
use crate::results::{HarvestReport, WordList};
use crate::shard::{self, ShardKey};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

type Job = (usize, String);

/// Runs fetch, extract and normalize for URLs, one shard at a time
#[derive(Clone)]
pub struct Harvester {
    fetcher: ContentFetcher,
    extractor: Extractor,
    normalizer: Normalizer,
    process_cache: SharedCache<String, WordList>,
    observer: Arc<dyn HarvestObserver>,
    max_workers: usize,
    shard_size: usize,
}

impl Harvester {
    pub fn new(
        fetcher: ContentFetcher,
        extractor: Extractor,
        normalizer: Normalizer,
        process_cache: SharedCache<String, WordList>,
        observer: Arc<dyn HarvestObserver>,
        max_workers: usize,
        shard_size: usize,
    ) -> Self {
        Self {
            fetcher,
            extractor,
            normalizer,
            process_cache,
            observer,
            max_workers,
            shard_size,
        }
    }

    /// Number of concurrent workers used by [`run_shard`](Self::run_shard)
    pub fn max_workers(&self) -> usize {
        self.max_workers.max(1)
    }

    pub fn shard_size(&self) -> usize {
        self.shard_size
    }

    /// Words harvested from `url`. Never fails: any error or panic on the way
    /// is reported and turned into an empty list.
    pub async fn process_url(&self, url: &str) -> WordList {
        let key = url.to_string();
        if let Some(cached) = self.process_cache.get(&key) {
            return cached;
        }

        let words = match AssertUnwindSafe(self.run_stages(url)).catch_unwind().await {
            Ok(words) => words,
            Err(payload) => {
                self.observer.url_failed(url, &panic_message(payload.as_ref()));
                Vec::new()
            }
        };

        self.process_cache.put(key, words.clone());
        words
    }

    async fn run_stages(&self, url: &str) -> WordList {
        let fetched = self.fetcher.fetch(url).await;
        let fragments = self.extractor.extract(url, &fetched);
        if fragments.is_empty() {
            return Vec::new();
        }

        self.normalizer.words(&fragments.join(" "))
    }

    /// Process every URL of `shard` on the worker pool.
    ///
    /// The result at position `i` always belongs to `shard[i]`, whatever order
    /// the workers finish in.
    pub async fn run_shard(&self, shard: &[String]) -> Vec<WordList> {
        let total = shard.len();
        if total == 0 {
            return Vec::new();
        }

        let num_workers = self.max_workers().min(total);
        ::log::info!("Processing {} URLs with {} workers", total, num_workers);

        // The queue is filled and closed up front; workers stop once it drains
        let (job_tx, job_rx) = mpsc::channel::<Job>(total);
        for (index, url) in shard.iter().enumerate() {
            if job_tx.send((index, url.clone())).await.is_err() {
                break;
            }
        }
        drop(job_tx);

        let (result_tx, mut result_rx) = mpsc::channel::<(usize, WordList)>(total);
        let job_rx = Arc::new(Mutex::new(job_rx));
        let completed = Arc::new(AtomicUsize::new(0));

        let workers: Vec<_> = (0..num_workers)
            .map(|worker_id| {
                self.spawn_worker(
                    worker_id,
                    Arc::clone(&job_rx),
                    result_tx.clone(),
                    Arc::clone(&completed),
                    total,
                )
            })
            .collect();

        // Each worker holds its own sender; the channel closes when all are done
        drop(result_tx);

        let mut slots: Vec<Option<WordList>> = vec![None; total];
        while let Some((index, words)) = result_rx.recv().await {
            slots[index] = Some(words);
        }

        for (worker_id, handle) in workers.into_iter().enumerate() {
            if let Err(e) = handle.await {
                ::log::error!("Worker {} terminated abnormally: {}", worker_id, e);
            }
        }

        slots
            .into_iter()
            .zip(shard)
            .map(|(slot, url)| {
                slot.unwrap_or_else(|| {
                    ::log::error!(target: "pipeline", "No result collected for {}", url);
                    Vec::new()
                })
            })
            .collect()
    }

    /// Spawns one worker pulling jobs from the shared queue until it is empty
    fn spawn_worker(
        &self,
        worker_id: usize,
        jobs: Arc<Mutex<mpsc::Receiver<Job>>>,
        results: mpsc::Sender<(usize, WordList)>,
        completed: Arc<AtomicUsize>,
        total: usize,
    ) -> JoinHandle<()> {
        let harvester = self.clone();
        ::log::trace!("Spawning worker {}", worker_id);

        tokio::spawn(async move {
            loop {
                let job = {
                    let mut rx = jobs.lock().await;
                    rx.recv().await
                };
                let Some((index, url)) = job else {
                    break;
                };

                let words = harvester.process_url(&url).await;
                let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                harvester.observer.url_completed(&url, done, total);

                if let Err(e) = results.send((index, words)).await {
                    ::log::error!("Worker {} failed to send result: {}", worker_id, e);
                    break;
                }
            }

            ::log::debug!("Worker {} finished, queue is empty", worker_id);
        })
    }

    /// Select the shard for `key`, process it, and flatten the words
    pub async fn harvest(&self, urls: &[String], key: ShardKey) -> HarvestReport {
        let (start, end) = shard::shard_bounds(urls.len(), key, self.shard_size);
        let selected = &urls[start..end];

        let results = self.run_shard(selected).await;

        HarvestReport {
            key: key.as_char(),
            total_urls: urls.len(),
            start,
            end,
            first_url: selected.first().cloned(),
            last_url: selected.last().cloned(),
            words: aggregate(results),
        }
    }
}

/// Concatenate per-URL word lists in order
pub fn aggregate(results: Vec<WordList>) -> WordList {
    results.into_iter().flatten().collect()
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
