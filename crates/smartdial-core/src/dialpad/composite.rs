use super::{LatinDialpadMap, RussianDialpadMap};
use crate::traits::DialpadMap;

/// Latin map plus an optional secondary script.
///
/// The Latin map always wins; the secondary map only sees characters the
/// Latin map does not know. This lets a Russian-locale user reach both
/// "Ivan" and "Иван" from the same keypad.
pub struct CompositeDialpadMap {
    latin: LatinDialpadMap,
    secondary: Option<Box<dyn DialpadMap>>,
}

impl CompositeDialpadMap {
    pub fn new(secondary: Option<Box<dyn DialpadMap>>) -> Self {
        Self {
            latin: LatinDialpadMap,
            secondary,
        }
    }

    /// Picks the secondary map from an ISO 639-1 language code
    /// (case-insensitive, region suffix ignored: `"ru"`, `"ru-RU"`, `"ru_RU"`).
    pub fn for_language(language: &str) -> Self {
        let lang = language
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let secondary: Option<Box<dyn DialpadMap>> = match lang.as_str() {
            "ru" => Some(Box::new(RussianDialpadMap)),
            _ => None,
        };
        log::debug!("dialpad map for language {language:?}: secondary={}", secondary.is_some());
        Self::new(secondary)
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }
}

impl Default for CompositeDialpadMap {
    fn default() -> Self {
        Self::new(None)
    }
}

impl std::fmt::Debug for CompositeDialpadMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeDialpadMap")
            .field("secondary", &self.secondary.is_some())
            .finish()
    }
}

impl DialpadMap for CompositeDialpadMap {
    fn normalize_character(&self, ch: char) -> char {
        let folded = self.latin.normalize_character(ch);
        if folded != ch || self.latin.is_alphabetic(folded) {
            return folded;
        }
        match &self.secondary {
            Some(map) => map.normalize_character(ch),
            None => ch,
        }
    }

    fn is_alphabetic(&self, ch: char) -> bool {
        self.latin.is_alphabetic(ch)
            || self.secondary.as_ref().is_some_and(|m| m.is_alphabetic(ch))
    }

    fn digit_index(&self, ch: char) -> Option<u8> {
        self.latin
            .digit_index(ch)
            .or_else(|| self.secondary.as_ref().and_then(|m| m.digit_index(ch)))
    }
}
