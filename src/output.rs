use crate::error::Result;
use crate::shard::ShardKey;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the artifact for a shard
pub fn output_file_name(key: ShardKey) -> String {
    format!("foxnewstext_{}.txt", key)
}

/// Write the space-joined words for `key` into `dir`, returning the path written
pub fn write_words(dir: impl AsRef<Path>, key: ShardKey, words: &[String]) -> Result<PathBuf> {
    let path = dir.as_ref().join(output_file_name(key));
    fs::write(&path, words.join(" "))?;
    ::log::info!("Saved {} words to {}", words.len(), path.display());
    Ok(path)
}
