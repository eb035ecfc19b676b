use crate::error::{HarvestError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a harvesting run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Attempts per URL, including the first one
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,

    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Number of concurrent workers
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,

    /// Number of URLs per shard
    #[serde(default = "default_shard_size")]
    pub shard_size: usize,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory the output artifact is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl HarvestConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every shard empty
    pub fn validate(&self) -> Result<()> {
        if self.shard_size == 0 {
            return Err(HarvestError::Config("shard_size must be positive".to_string()));
        }
        Ok(())
    }

    /// Per-attempt timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            timeout_secs: default_timeout_secs(),
            max_workers: default_max_workers(),
            shard_size: default_shard_size(),
            user_agent: default_user_agent(),
            output_dir: default_output_dir(),
        }
    }
}

/// Default value for max_retries (a single attempt)
fn default_max_retries() -> usize {
    1
}

/// Default value for timeout_secs
fn default_timeout_secs() -> u64 {
    20
}

/// Default value for max_workers
fn default_max_workers() -> usize {
    20
}

/// Default value for shard_size
fn default_shard_size() -> usize {
    crate::shard::SHARD_SIZE
}

/// Default browser-like User-Agent
fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
