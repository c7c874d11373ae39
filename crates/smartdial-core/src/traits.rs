// crates/smartdial-core/src/traits.rs

/// Character classifier for one dialpad layout.
///
/// A map answers, for a single character, whether it can be typed on the
/// dialpad and which key (0-9) produces it. Every method is total: characters
/// the map does not know about are simply "not dialable" and are returned
/// unchanged by [`DialpadMap::normalize_character`].
///
/// Implementors only have to describe their alphabet. The predicates accept
/// raw characters and fold them first, so `is_alphabetic('É')` holds for the
/// Latin map even though the key table only covers `a..=z`.
///
/// # Examples
/// ```rust
/// use smartdial_core::{DialpadMap, LatinDialpadMap};
///
/// let map = LatinDialpadMap;
/// assert_eq!(map.normalize_character('Ü'), 'u');
/// assert_eq!(map.digit_index('j'), Some(5));
/// assert_eq!(map.digit_char('S'), '7');
/// assert!(!map.is_dialable('-'));
/// ```
pub trait DialpadMap: Send + Sync {
    /// Lowercase, diacritic-free form of `ch`, or `ch` itself when the map
    /// has no entry for it. Must be idempotent.
    fn normalize_character(&self, ch: char) -> char;

    /// True if `ch` (after folding) is a letter printed on some key.
    fn is_alphabetic(&self, ch: char) -> bool;

    /// Key index 0-9 for a dialable character, `None` otherwise.
    fn digit_index(&self, ch: char) -> Option<u8>;

    /// True for the ASCII digits `0..=9`.
    #[inline]
    fn is_numeric(&self, ch: char) -> bool {
        ch.is_ascii_digit()
    }

    /// Digit or mappable letter.
    #[inline]
    fn is_dialable(&self, ch: char) -> bool {
        self.is_alphabetic(ch) || self.is_numeric(ch)
    }

    /// The ASCII digit a letter maps to. Anything that is not a letter of
    /// this map (digits included) is passed through unchanged.
    fn digit_char(&self, ch: char) -> char {
        if !self.is_alphabetic(ch) {
            return ch;
        }
        match self.digit_index(ch) {
            Some(d) => char::from(b'0' + d),
            None => ch,
        }
    }
}

impl<M: DialpadMap + ?Sized> DialpadMap for &M {
    fn normalize_character(&self, ch: char) -> char {
        (**self).normalize_character(ch)
    }
    fn is_alphabetic(&self, ch: char) -> bool {
        (**self).is_alphabetic(ch)
    }
    fn digit_index(&self, ch: char) -> Option<u8> {
        (**self).digit_index(ch)
    }
    fn is_numeric(&self, ch: char) -> bool {
        (**self).is_numeric(ch)
    }
}

impl<M: DialpadMap + ?Sized> DialpadMap for Box<M> {
    fn normalize_character(&self, ch: char) -> char {
        (**self).normalize_character(ch)
    }
    fn is_alphabetic(&self, ch: char) -> bool {
        (**self).is_alphabetic(ch)
    }
    fn digit_index(&self, ch: char) -> Option<u8> {
        (**self).digit_index(ch)
    }
    fn is_numeric(&self, ch: char) -> bool {
        (**self).is_numeric(ch)
    }
}
