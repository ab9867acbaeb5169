//! Sentence source: the pool of lines a session draws targets from
//!
//! One sentence per line. A default pool is compiled into the binary.

use crate::error::TrainerError;
use crate::kana::{KeyKanaTable, Target};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Sentences used when no file is given
pub const BUNDLED_SENTENCES: &str = include_str!("../data/sentences.txt");

/// Split text into sentence lines (trailing whitespace stripped, blank lines dropped)
pub fn parse_sentences(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read sentence lines from a UTF-8 file
pub fn load_sentences(path: &Path) -> Result<Vec<String>, TrainerError> {
    let content = fs::read_to_string(path).map_err(|source| TrainerError::SentenceFile {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = parse_sentences(&content);
    debug!(path = %path.display(), lines = lines.len(), "sentences loaded");
    Ok(lines)
}

/// Turn lines into targets, dropping lines with nothing to type.
///
/// Fails with `EmptySentencePool` when no usable line remains.
pub fn prepare_pool<S: AsRef<str>>(lines: &[S], table: &KeyKanaTable) -> Result<Vec<Target>, TrainerError> {
    let mut pool = Vec::with_capacity(lines.len());

    for line in lines {
        let target = Target::build(line.as_ref(), table);

        if !target.is_typable() {
            warn!(sentence = line.as_ref(), "skipping sentence without typable kana");
            continue;
        }

        let unmapped = target.unmapped();
        if !unmapped.is_empty() {
            let chars: String = unmapped.iter().map(|&(_, c)| c).collect();
            warn!(sentence = line.as_ref(), %chars, "characters without a key will be skipped");
        }

        pool.push(target);
    }

    if pool.is_empty() {
        return Err(TrainerError::EmptySentencePool);
    }

    Ok(pool)
}
