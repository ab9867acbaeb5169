//! Error detection: which kana get confused with which
//!
//! Detects:
//! - Kana confused with the same other kana 3+ times
//! - The most common confusion pairs for the session summary

use std::collections::HashMap;

/// Minimum occurrences to flag a pair as a persistent error
const ERROR_THRESHOLD: u32 = 3;

/// Records (expected kana, typed kana) pairs for every mistake
#[derive(Clone, Debug, Default)]
pub struct ErrorDetector {
    /// expected kana → (typed kana → count)
    error_pairs: HashMap<char, HashMap<char, u32>>,
}

impl ErrorDetector {
    /// Create new error detector
    pub fn new() -> Self {
        ErrorDetector::default()
    }

    /// Record an error: expected kana vs. the kana the pressed key produces
    pub fn record_error(&mut self, expected: char, got: char) {
        if expected == got {
            return;
        }

        *self
            .error_pairs
            .entry(expected)
            .or_default()
            .entry(got)
            .or_insert(0) += 1;
    }

    /// Most common error pairs, most frequent first
    pub fn top_error_pairs(&self, count: usize) -> Vec<((char, char), u32)> {
        let mut pairs: Vec<((char, char), u32)> = self
            .error_pairs
            .iter()
            .flat_map(|(&expected, got_map)| {
                got_map
                    .iter()
                    .map(move |(&got, &error_count)| ((expected, got), error_count))
            })
            .collect();

        // Ties broken by the pair itself so output is stable
        pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        pairs.truncate(count);
        pairs
    }

    /// Kana with at least one persistent confusion, sorted
    pub fn problematic_chars(&self) -> Vec<char> {
        let mut chars: Vec<char> = self
            .error_pairs
            .iter()
            .filter(|(_, got_map)| got_map.values().any(|&count| count >= ERROR_THRESHOLD))
            .map(|(&expected, _)| expected)
            .collect();
        chars.sort_unstable();
        chars
    }
}
