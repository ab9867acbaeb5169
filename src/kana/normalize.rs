//! Kana normalization
//!
//! Folds katakana into hiragana and splits voiced kana into base kana plus a
//! standalone mark, which is the form the key table is written in:
//! - ガ → が → か゛
//! - ぱ → は゜
//! - ゔ → う゛

/// Standalone voiced-sound mark (dakuten)
pub const DAKUTEN: char = '\u{309B}';
/// Standalone semi-voiced-sound mark (handakuten)
pub const HANDAKUTEN: char = '\u{309C}';

/// Distance between a katakana and its hiragana counterpart
const KATAKANA_SHIFT: u32 = 0x60;

/// Katakana ァ..ヴ (ー and the small ヵヶ are not folded)
pub fn is_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F4}').contains(&c)
}

/// Fold a katakana character into hiragana; anything else is returned as is
pub fn to_hiragana(c: char) -> char {
    if is_katakana(c) {
        shift_down(c, KATAKANA_SHIFT)
    } else {
        c
    }
}

fn shift_down(c: char, by: u32) -> char {
    char::from_u32(c as u32 - by).unwrap_or(c)
}

/// Split a composed voiced hiragana into (base, mark)
pub fn split_sound_mark(c: char) -> Option<(char, char)> {
    match c {
        // う has no voiced neighbour at codepoint - 1
        'ゔ' => Some(('う', DAKUTEN)),
        'が' | 'ぎ' | 'ぐ' | 'げ' | 'ご' | 'ざ' | 'じ' | 'ず' | 'ぜ' | 'ぞ' | 'だ' | 'ぢ' | 'づ'
        | 'で' | 'ど' | 'ば' | 'び' | 'ぶ' | 'べ' | 'ぼ' => Some((shift_down(c, 1), DAKUTEN)),
        'ぱ' | 'ぴ' | 'ぷ' | 'ぺ' | 'ぽ' => Some((shift_down(c, 2), HANDAKUTEN)),
        _ => None,
    }
}

/// Convert kana text into plain hiragana with standalone sound marks.
///
/// Characters outside the kana blocks (Latin, punctuation, whitespace,
/// already split marks) pass through unchanged, so the result is a fixed
/// point: `normalize(&normalize(t)) == normalize(t)`.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 6);

    for c in text.chars().map(to_hiragana) {
        match split_sound_mark(c) {
            Some((base, mark)) => {
                out.push(base);
                out.push(mark);
            }
            None => out.push(c),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voiced_split() {
        assert_eq!(normalize("が"), "か゛");
        assert_eq!(normalize("ガ"), "か゛");
        assert_eq!(normalize("ぼ"), "ほ゛");
        assert_eq!(normalize("ぢ"), "ち゛");
    }

    #[test]
    fn test_semi_voiced_split() {
        assert_eq!(normalize("ぱ"), "は゜");
        assert_eq!(normalize("ポ"), "ほ゜");
    }

    #[test]
    fn test_vu() {
        assert_eq!(normalize("ゔ"), "う゛");
        assert_eq!(normalize("ヴァ"), "う゛ぁ");
    }

    #[test]
    fn test_katakana_fold() {
        assert_eq!(normalize("カタカナ"), "かたかな");
        assert_eq!(normalize("コーヒー"), "こーひー");
        assert_eq!(normalize("ッャ"), "っゃ");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize("abc 123!"), "abc 123!");
        assert_eq!(normalize("漢字"), "漢字");
        assert_eq!(normalize("か゛"), "か゛");
        assert_eq!(normalize("、。・"), "、。・");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let once = normalize("ガッコウへいこう、パン・ヴィデオ");
        assert_eq!(normalize(&once), once);
        assert!(once.chars().all(|c| !is_katakana(c)));
    }

    #[test]
    fn test_classification() {
        assert!(is_katakana('ァ'));
        assert!(is_katakana('ヴ'));
        assert!(!is_katakana('ー'));
        assert_eq!(split_sound_mark(DAKUTEN), None);
        assert_eq!(split_sound_mark('\u{3099}'), None);
    }
}
