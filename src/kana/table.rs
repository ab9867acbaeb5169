//! Key/kana table: JIS kana layout on a US keyboard
//!
//! Every listed key code produces exactly one kana glyph and every glyph is
//! produced by exactly one key. Voiced kana are typed as base + mark key.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Raw key code as delivered by the terminal (code point for printable keys)
pub type KeyCode = u32;

/// Escape key; aborts the session
pub const CANCEL_KEY: KeyCode = 0x1b;

/// Keyboard rows paired with the kana each key produces
const KANA_ROWS: &[(&str, &str)] = &[
    ("1234567890-=", "ぬふあうえおやゆよわほ゜"),
    ("qwertyuiop[]\\", "たていすかんなにらせ゛むへ"),
    ("asdfghjkl;'", "ちとしはきくまのりれけ"),
    ("zxcvbnm,./", "つさそひこみもねるめ"),
    ("#$%^&*()", "ぁぅぇぉゃゅょを"),
    ("E}", "ぃー"),
    ("\"", "ろ"),
    ("Z<>?", "っ、。・"),
];

/// Bidirectional key code ↔ kana mapping
#[derive(Clone, Debug)]
pub struct KeyKanaTable {
    /// Key code → kana glyph
    key_to_kana: FxHashMap<KeyCode, char>,
    /// Kana glyph → key code
    kana_to_key: FxHashMap<char, KeyCode>,
}

impl KeyKanaTable {
    /// Build the standard JIS kana table
    pub fn new() -> Self {
        Self::from_rows(KANA_ROWS)
    }

    /// Process-wide table, built on first use
    pub fn global() -> &'static KeyKanaTable {
        static TABLE: OnceLock<KeyKanaTable> = OnceLock::new();
        TABLE.get_or_init(KeyKanaTable::new)
    }

    fn from_rows(rows: &[(&str, &str)]) -> Self {
        let mut key_to_kana = FxHashMap::default();
        let mut kana_to_key = FxHashMap::default();

        for &(keys, kana) in rows {
            debug_assert_eq!(
                keys.chars().count(),
                kana.chars().count(),
                "key row {keys:?} and kana row {kana:?} differ in length"
            );
            for (key, glyph) in keys.chars().zip(kana.chars()) {
                let code = key as KeyCode;
                key_to_kana.insert(code, glyph);
                kana_to_key.insert(glyph, code);
            }
        }

        KeyKanaTable {
            key_to_kana,
            kana_to_key,
        }
    }

    /// Kana produced by a key, if any
    pub fn kana_for_key(&self, code: KeyCode) -> Option<char> {
        self.key_to_kana.get(&code).copied()
    }

    /// Key that produces a kana, if any
    pub fn key_for_kana(&self, glyph: char) -> Option<KeyCode> {
        self.kana_to_key.get(&glyph).copied()
    }

    pub fn is_mapped_key(&self, code: KeyCode) -> bool {
        self.key_to_kana.contains_key(&code)
    }

    /// Number of mapped keys
    pub fn len(&self) -> usize {
        self.key_to_kana.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key_to_kana.is_empty()
    }

    /// All (key code, kana) entries, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = (KeyCode, char)> + '_ {
        self.key_to_kana.iter().map(|(&code, &glyph)| (code, glyph))
    }
}

impl Default for KeyKanaTable {
    fn default() -> Self {
        Self::new()
    }
}
