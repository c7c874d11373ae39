use crate::text::fold_latin_char;
use crate::traits::DialpadMap;

/// Key of each letter `a..=z` on the standard telephone keypad.
const LATIN_KEYS: [u8; 26] = [
    2, 2, 2, // abc
    3, 3, 3, // def
    4, 4, 4, // ghi
    5, 5, 5, // jkl
    6, 6, 6, // mno
    7, 7, 7, 7, // pqrs
    8, 8, 8, // tuv
    9, 9, 9, 9, // wxyz
];

/// Standard keypad layout (2=ABC ... 9=WXYZ) with Latin diacritic folding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatinDialpadMap;

impl DialpadMap for LatinDialpadMap {
    #[inline]
    fn normalize_character(&self, ch: char) -> char {
        fold_latin_char(ch)
    }

    #[inline]
    fn is_alphabetic(&self, ch: char) -> bool {
        fold_latin_char(ch).is_ascii_lowercase()
    }

    fn digit_index(&self, ch: char) -> Option<u8> {
        if ch.is_ascii_digit() {
            return Some(ch as u8 - b'0');
        }
        let folded = fold_latin_char(ch);
        if folded.is_ascii_lowercase() {
            Some(LATIN_KEYS[(folded as u8 - b'a') as usize])
        } else {
            None
        }
    }
}
