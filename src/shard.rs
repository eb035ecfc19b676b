//! Splitting the URL list into letter-keyed shards

use crate::error::{HarvestError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of URLs in a shard
pub const SHARD_SIZE: usize = 30_000;

/// A shard selector: one letter from `a` to `z`, case-insensitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShardKey(char);

impl ShardKey {
    /// Parse a key from user input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c)
                .map_err(|_| HarvestError::InvalidShardKey(input.to_string())),
            _ => Err(HarvestError::InvalidShardKey(input.to_string())),
        }
    }

    pub fn from_char(c: char) -> Result<Self> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_lowercase()))
        } else {
            Err(HarvestError::InvalidShardKey(c.to_string()))
        }
    }

    /// Zero-based position of the letter (`a` is 0)
    pub fn index(&self) -> usize {
        (self.0 as u8 - b'a') as usize
    }

    /// The lowercase letter
    pub fn as_char(&self) -> char {
        self.0
    }
}

impl FromStr for ShardKey {
    type Err = HarvestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ShardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index range `[start, end)` of the shard, clamped to `len`
pub fn shard_bounds(len: usize, key: ShardKey, shard_size: usize) -> (usize, usize) {
    let start = key.index().saturating_mul(shard_size);
    let end = start.saturating_add(shard_size);
    (start.min(len), end.min(len))
}

/// The default-sized shard of `urls` selected by `key`
pub fn select_shard(urls: &[String], key: ShardKey) -> &[String] {
    select_shard_sized(urls, key, SHARD_SIZE)
}

/// The shard of `urls` selected by `key`; shards past the end are empty
pub fn select_shard_sized(urls: &[String], key: ShardKey, shard_size: usize) -> &[String] {
    let (start, end) = shard_bounds(urls.len(), key, shard_size);
    &urls[start..end]
}

/// One URL per line; surrounding whitespace trimmed and blank lines skipped
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
