/// Ordered alphabetic tokens harvested from one URL
pub type WordList = Vec<String>;

/// Outcome of harvesting one shard
#[derive(Debug, Clone)]
pub struct HarvestReport {
    /// Shard letter the run was keyed on
    pub key: char,

    /// Number of URLs in the full input list
    pub total_urls: usize,

    /// Index range of the shard within the full list (clamped)
    pub start: usize,
    pub end: usize,

    /// First and last URL of the shard, if it is not empty
    pub first_url: Option<String>,
    pub last_url: Option<String>,

    /// Aggregated tokens in shard order
    pub words: WordList,
}

impl HarvestReport {
    /// Number of URLs actually processed
    pub fn shard_len(&self) -> usize {
        self.end - self.start
    }

    /// Tokens joined the way the output artifact stores them
    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}
