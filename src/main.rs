use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use word_harvest::observer::{HarvestObserver, LogObserver};
use word_harvest::{Harvest, ShardKey, output, shard};

mod args;
use args::Args;

/// Drives a progress bar and forwards every event to the log
struct ProgressObserver {
    bar: ProgressBar,
    log: LogObserver,
}

impl ProgressObserver {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self {
            bar,
            log: LogObserver,
        }
    }
}

impl HarvestObserver for ProgressObserver {
    fn fetch_attempt_failed(
        &self,
        url: &str,
        attempt: usize,
        max_retries: usize,
        error: &dyn fmt::Display,
    ) {
        self.log.fetch_attempt_failed(url, attempt, max_retries, error);
    }

    fn fetch_exhausted(&self, url: &str) {
        self.log.fetch_exhausted(url);
    }

    fn content_missing(&self, url: &str) {
        self.log.content_missing(url);
    }

    fn url_failed(&self, url: &str, error: &dyn fmt::Display) {
        self.log.url_failed(url, error);
    }

    fn url_completed(&self, url: &str, completed: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(completed as u64);
        self.log.url_completed(url, completed, total);
    }
}

/// Ask for the shard letter on stdin
fn prompt_key() -> io::Result<String> {
    print!("Enter the option ('a' to 'z'): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Args::parse()).await {
        ::log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut builder = Harvest::new();

    if let Some(path) = &args.config {
        ::log::info!("Loading configuration from {}", path.display());
        builder = builder.with_config_file(path)?;
    }
    if let Some(workers) = args.workers {
        builder = builder.with_max_workers(workers);
    }
    if let Some(retries) = args.retries {
        builder = builder.with_max_retries(retries);
    }
    if let Some(timeout) = args.timeout {
        builder = builder.with_timeout(timeout);
    }

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| builder.config().output_dir.clone());

    let contents = std::fs::read_to_string(&args.urls_file)?;
    let urls = shard::parse_url_list(&contents);
    println!("Total URLs: {}", urls.len());

    // The key is validated before any network work starts
    let raw_key = match args.key {
        Some(key) => key,
        None => prompt_key()?,
    };
    let key = ShardKey::parse(&raw_key)?;

    let observer = Arc::new(ProgressObserver::new());
    let harvester = builder.with_observer(observer.clone()).build()?;

    let selected = shard::select_shard_sized(&urls, key, harvester.shard_size());
    println!("\nSelected Range ({}):", key.as_char().to_ascii_uppercase());
    println!("First URL: {}", selected.first().map_or("<none>", |s| s.as_str()));
    println!("Last URL: {}", selected.last().map_or("<none>", |s| s.as_str()));

    let start_time = std::time::Instant::now();
    let report = harvester.harvest(&urls, key).await;
    observer.bar.finish();

    ::log::info!(
        "Processed {} URLs into {} words in {:.2} seconds",
        report.shard_len(),
        report.words.len(),
        start_time.elapsed().as_secs_f64()
    );

    let path = output::write_words(&output_dir, key, &report.words)?;
    println!("Saved processed words to {}", path.display());

    Ok(())
}
