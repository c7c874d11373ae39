use crate::text::{fold_latin_char, transliterate_letter};
use crate::traits::DialpadMap;

/// Latin keypad that reaches any script `deunicode` can romanize.
///
/// The static Latin table is consulted first; for anything else the first
/// letter of the romanization is used, so `Ж` dials as `z` (9) and `Ω` as
/// `o` (6). Coarser than a dedicated script map, but covers names in
/// scripts without their own keypad layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransliteratingDialpadMap;

impl TransliteratingDialpadMap {
    const KEYS: &'static [u8; 26] = b"22233344455566677778889999";
}

impl DialpadMap for TransliteratingDialpadMap {
    fn normalize_character(&self, ch: char) -> char {
        let folded = fold_latin_char(ch);
        if folded != ch || ch.is_ascii() {
            return folded;
        }
        transliterate_letter(ch).unwrap_or(ch)
    }

    fn is_alphabetic(&self, ch: char) -> bool {
        self.normalize_character(ch).is_ascii_lowercase()
    }

    fn digit_index(&self, ch: char) -> Option<u8> {
        if ch.is_ascii_digit() {
            return Some(ch as u8 - b'0');
        }
        let folded = self.normalize_character(ch);
        folded
            .is_ascii_lowercase()
            .then(|| Self::KEYS[(folded as u8 - b'a') as usize] - b'0')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn romanizes_other_scripts() {
        let map = TransliteratingDialpadMap;
        assert_eq!(map.normalize_character('Ж'), 'z');
        assert_eq!(map.digit_char('Ж'), '9');
        assert_eq!(map.digit_char('É'), '3');
    }

    #[test]
    fn keeps_separators_and_digits() {
        let map = TransliteratingDialpadMap;
        assert!(!map.is_dialable(' '));
        assert!(!map.is_dialable('-'));
        assert_eq!(map.digit_index('4'), Some(4));
    }

    #[test]
    fn normalization_is_idempotent() {
        let map = TransliteratingDialpadMap;
        for ch in ['Ж', 'Ω', 'é', 'Q', '-', '中'] {
            let once = map.normalize_character(ch);
            assert_eq!(map.normalize_character(once), once);
        }
    }
}
