//! Per-keystroke judging
//!
//! A round is a cursor walking over a Target. Each key is judged against the
//! expected key at the cursor:
//! - exact match: `Correct`, cursor moves to the next typable position
//! - other mapped key: `Mistake`, cursor stays
//! - escape: `Cancelled`
//! - anything else: `Ignored`

use crate::kana::{KeyCode, KeyKanaTable, Target, CANCEL_KEY};
use tracing::debug;

/// Outcome of one judged keystroke
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Expected key; the only verdict that advances the cursor
    Correct,
    /// A kana key, but not the expected one
    Mistake {
        /// Kana the pressed key produces
        typed: char,
    },
    /// Escape; the session ends
    Cancelled,
    /// Key with no kana (arrows, control keys, ...)
    Ignored,
}

/// Judges keystrokes against targets
#[derive(Clone, Copy, Debug)]
pub struct JudgeEngine<'t> {
    table: &'t KeyKanaTable,
}

impl<'t> JudgeEngine<'t> {
    pub fn new(table: &'t KeyKanaTable) -> Self {
        JudgeEngine { table }
    }

    pub fn table(&self) -> &'t KeyKanaTable {
        self.table
    }

    /// Cursor position a fresh round starts at (unmapped leading characters skipped)
    pub fn start(&self, target: &Target) -> usize {
        target.next_typable(0)
    }

    /// Judge `key` at `cursor`, returning the verdict and the new cursor
    pub fn judge(&self, target: &Target, cursor: usize, key: KeyCode) -> (Verdict, usize) {
        if cursor >= target.len() {
            let verdict = if key == CANCEL_KEY {
                Verdict::Cancelled
            } else {
                Verdict::Ignored
            };
            return (verdict, cursor);
        }

        if target.expected_at(cursor) == Some(key) {
            debug!(cursor, key, "correct");
            return (Verdict::Correct, target.next_typable(cursor + 1));
        }

        if let Some(typed) = self.table.kana_for_key(key) {
            debug!(cursor, key, %typed, "mistake");
            return (Verdict::Mistake { typed }, cursor);
        }

        if key == CANCEL_KEY {
            return (Verdict::Cancelled, cursor);
        }

        (Verdict::Ignored, cursor)
    }
}

/// Cursor state of the round in progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JudgeState {
    cursor: usize,
    len: usize,
}

impl JudgeState {
    /// Start a round on `target`
    pub fn begin(engine: &JudgeEngine<'_>, target: &Target) -> Self {
        JudgeState {
            cursor: engine.start(target),
            len: target.len(),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor == self.len
    }

    /// Judge a key and move the cursor accordingly
    pub fn advance(&mut self, engine: &JudgeEngine<'_>, target: &Target, key: KeyCode) -> Verdict {
        let (verdict, cursor) = engine.judge(target, self.cursor, key);
        debug_assert!(cursor >= self.cursor);
        self.cursor = cursor;
        verdict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> KeyCode {
        c as KeyCode
    }

    #[test]
    fn test_correct_advances() {
        let engine = JudgeEngine::new(KeyKanaTable::global());
        let target = Target::build("あか", engine.table());
        assert_eq!(engine.judge(&target, 0, key('3')), (Verdict::Correct, 1));
        assert_eq!(engine.judge(&target, 1, key('t')), (Verdict::Correct, 2));
    }

    #[test]
    fn test_mistake_keeps_cursor() {
        let engine = JudgeEngine::new(KeyKanaTable::global());
        let target = Target::build("あか", engine.table());
        assert_eq!(
            engine.judge(&target, 0, key('x')),
            (Verdict::Mistake { typed: 'さ' }, 0)
        );
        // right key, wrong position
        assert_eq!(
            engine.judge(&target, 0, key('t')),
            (Verdict::Mistake { typed: 'か' }, 0)
        );
    }

    #[test]
    fn test_cancel_and_ignored() {
        let engine = JudgeEngine::new(KeyKanaTable::global());
        let target = Target::build("あか", engine.table());
        assert_eq!(engine.judge(&target, 1, CANCEL_KEY), (Verdict::Cancelled, 1));
        assert_eq!(engine.judge(&target, 1, 0), (Verdict::Ignored, 1));
        assert_eq!(engine.judge(&target, 0, key('A')), (Verdict::Ignored, 0));
        assert_eq!(engine.judge(&target, 2, key('3')), (Verdict::Ignored, 2));
        assert_eq!(engine.judge(&target, 2, CANCEL_KEY), (Verdict::Cancelled, 2));
    }

    #[test]
    fn test_voiced_takes_two_keys() {
        let engine = JudgeEngine::new(KeyKanaTable::global());
        let target = Target::build("ぶ", engine.table());
        let mut state = JudgeState::begin(&engine, &target);
        assert_eq!(state.advance(&engine, &target, key('2')), Verdict::Correct);
        assert!(!state.is_complete());
        assert_eq!(
            state.advance(&engine, &target, key(']')),
            Verdict::Mistake { typed: 'む' }
        );
        assert_eq!(state.advance(&engine, &target, key('[')), Verdict::Correct);
        assert!(state.is_complete());
    }

    #[test]
    fn test_unmapped_positions_are_skipped() {
        let engine = JudgeEngine::new(KeyKanaTable::global());
        let target = Target::build("Aあゐか", engine.table());
        let mut state = JudgeState::begin(&engine, &target);
        assert_eq!(state.cursor(), 1);
        assert_eq!(state.advance(&engine, &target, key('3')), Verdict::Correct);
        assert_eq!(state.cursor(), 3);
        assert_eq!(state.advance(&engine, &target, key('t')), Verdict::Correct);
        assert!(state.is_complete());
    }
}
