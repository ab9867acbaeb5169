//! Property-based tests for the key table and normalization.

use proptest::prelude::*;

use crate::kana::normalize::{is_katakana, split_sound_mark};
use crate::kana::{normalize, KeyKanaTable, Target};

/// Characters from the kana blocks plus a sprinkling of ASCII and marks
fn arb_text() -> impl Strategy<Value = String> {
    let kana_char = prop_oneof![
        4 => (0x3041u32..=0x3096).prop_map(|c| char::from_u32(c).unwrap()),
        4 => (0x30A1u32..=0x30FC).prop_map(|c| char::from_u32(c).unwrap()),
        1 => prop::sample::select(vec!['゛', '゜', 'a', ' ', '!', '漢', '、']),
    ];
    prop::collection::vec(kana_char, 0..24).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in arb_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_no_composed_kana(text in arb_text()) {
        let normalized = normalize(&text);
        for c in normalized.chars() {
            prop_assert!(!is_katakana(c));
            prop_assert!(split_sound_mark(c).is_none());
        }
    }

    #[test]
    fn target_keeps_positional_correspondence(text in arb_text()) {
        let target = Target::build(&text, KeyKanaTable::global());
        prop_assert_eq!(target.len(), target.display().chars().count());
        for (pos, c) in target.display().chars().enumerate() {
            prop_assert_eq!(target.expected_at(pos), KeyKanaTable::global().key_for_kana(c));
        }
    }

    #[test]
    fn table_lookups_invert(code in 0u32..0x80) {
        let table = KeyKanaTable::global();
        if let Some(glyph) = table.kana_for_key(code) {
            prop_assert_eq!(table.key_for_kana(glyph), Some(code));
        } else {
            prop_assert!(!table.is_mapped_key(code));
        }
    }
}

#[test]
fn every_kana_maps_back_to_its_key() {
    let table = KeyKanaTable::global();
    for (code, glyph) in table.entries() {
        assert_eq!(table.kana_for_key(table.key_for_kana(glyph).unwrap()), Some(glyph));
        assert_eq!(table.key_for_kana(glyph), Some(code));
    }
}
