//! Practice target: one sentence prepared for typing

use super::normalize::normalize;
use super::table::{KeyCode, KeyKanaTable};
use tracing::debug;

/// A sentence with its normalized form and expected keystrokes.
///
/// `expected` holds one entry per character of `display`; characters the
/// keyboard cannot produce have no key and are skipped while typing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    original: String,
    display: String,
    expected: Vec<Option<KeyCode>>,
}

impl Target {
    /// Prepare a raw sentence line
    pub fn build(raw: &str, table: &KeyKanaTable) -> Self {
        let display = normalize(raw);
        let expected: Vec<Option<KeyCode>> =
            display.chars().map(|c| table.key_for_kana(c)).collect();

        let unmapped = expected.iter().filter(|key| key.is_none()).count();
        if unmapped > 0 {
            debug!(sentence = raw, unmapped, "sentence has characters without a key");
        }

        Target {
            original: raw.to_string(),
            display,
            expected,
        }
    }

    /// Sentence as written in the source
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Normalized sentence, one character per expected key
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn expected(&self) -> &[Option<KeyCode>] {
        &self.expected
    }

    pub fn len(&self) -> usize {
        self.expected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }

    /// Expected key at a position (None past the end or for unmapped characters)
    pub fn expected_at(&self, pos: usize) -> Option<KeyCode> {
        self.expected.get(pos).copied().flatten()
    }

    /// Normalized character at a position
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.display.chars().nth(pos)
    }

    /// First position at or after `from` that has a key, or `len()` if none
    pub fn next_typable(&self, from: usize) -> usize {
        (from..self.expected.len())
            .find(|&pos| self.expected[pos].is_some())
            .unwrap_or(self.expected.len())
    }

    /// Whether at least one character can be typed
    pub fn is_typable(&self) -> bool {
        self.expected.iter().any(Option::is_some)
    }

    /// Positions and characters that have no key
    pub fn unmapped(&self) -> Vec<(usize, char)> {
        self.display
            .chars()
            .zip(&self.expected)
            .enumerate()
            .filter_map(|(pos, (c, key))| if key.is_none() { Some((pos, c)) } else { None })
            .collect()
    }

    /// Keys that complete this target, in order
    pub fn keystrokes(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.expected.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_plain() {
        let target = Target::build("あか", KeyKanaTable::global());
        assert_eq!(target.original(), "あか");
        assert_eq!(target.display(), "あか");
        assert_eq!(
            target.expected(),
            &[Some('3' as KeyCode), Some('t' as KeyCode)]
        );
        assert!(target.unmapped().is_empty());
    }

    #[test]
    fn test_build_voiced_katakana() {
        let target = Target::build("ガム", KeyKanaTable::global());
        assert_eq!(target.original(), "ガム");
        assert_eq!(target.display(), "か゛む");
        assert_eq!(target.len(), 3);
        let keys: Vec<KeyCode> = target.keystrokes().collect();
        assert_eq!(keys, vec!['t' as KeyCode, '[' as KeyCode, ']' as KeyCode]);
    }

    #[test]
    fn test_unmapped_positions() {
        let target = Target::build("a、ゐか", KeyKanaTable::global());
        assert_eq!(target.len(), target.display().chars().count());
        assert_eq!(target.unmapped(), vec![(0, 'a'), (2, 'ゐ')]);
        assert_eq!(target.next_typable(0), 1);
        assert_eq!(target.next_typable(2), 3);
        assert_eq!(target.next_typable(4), 4);
        assert_eq!(target.expected_at(0), None);
        assert_eq!(target.char_at(3), Some('か'));
        assert!(target.is_typable());
    }

    #[test]
    fn test_untypable() {
        let target = Target::build("hello", KeyKanaTable::global());
        assert!(!target.is_typable());
        assert_eq!(target.next_typable(0), target.len());
        assert!(Target::build("", KeyKanaTable::global()).is_empty());
    }
}
