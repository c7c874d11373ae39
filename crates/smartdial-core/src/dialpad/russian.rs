use crate::traits::DialpadMap;

/// Russian keypad layout, four letters per key:
/// 2=абвг 3=дежз 4=ийкл 5=мноп 6=рсту 7=фхцч 8=шщъы 9=ьэюя.
///
/// Capitals fold to lowercase and `ё` folds to `е`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RussianDialpadMap;

impl DialpadMap for RussianDialpadMap {
    fn normalize_character(&self, ch: char) -> char {
        match ch {
            'А'..='Я' => char::from_u32(ch as u32 + 0x20).unwrap_or(ch),
            'Ё' | 'ё' => 'е',
            _ => ch,
        }
    }

    fn is_alphabetic(&self, ch: char) -> bool {
        matches!(self.normalize_character(ch), 'а'..='я')
    }

    fn digit_index(&self, ch: char) -> Option<u8> {
        if ch.is_ascii_digit() {
            return Some(ch as u8 - b'0');
        }
        match self.normalize_character(ch) {
            c @ 'а'..='я' => Some(((c as u32 - 'а' as u32) / 4 + 2) as u8),
            _ => None,
        }
    }
}
