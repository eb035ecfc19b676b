use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "word-harvest")]
#[command(about = "Fetches a shard of a URL list and saves the alphabetic words of every page")]
#[command(version)]
pub struct Args {
    /// File with one URL per line
    pub urls_file: PathBuf,

    /// Shard to process, a letter from 'a' to 'z' (prompted for when omitted)
    #[arg(short, long)]
    pub key: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of concurrent workers
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Fetch attempts per URL
    #[arg(short, long)]
    pub retries: Option<usize>,

    /// Per-attempt timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory to write the output file to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}
