// crates/smartdial-core/src/text.rs

/// Folds a Latin character to its lowercase, diacritic-free base letter.
///
/// Covers uppercase ASCII, Latin-1 Supplement letters and Latin Extended-A.
/// Characters without an entry come back unchanged, so the function is
/// total and idempotent: every output is either lowercase ASCII (which has
/// no entry) or the untouched input.
///
/// # Examples
///
/// ```rust
/// use smartdial_core::text::fold_latin_char;
///
/// assert_eq!(fold_latin_char('Ł'), 'l');
/// assert_eq!(fold_latin_char('é'), 'e');
/// assert_eq!(fold_latin_char('Q'), 'q');
/// assert_eq!(fold_latin_char('-'), '-');
/// ```
pub fn fold_latin_char(ch: char) -> char {
    match ch {
        'A'..='Z' => ch.to_ascii_lowercase(),

        // Latin-1 Supplement
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Æ' => 'a',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'æ' => 'a',
        'Ç' | 'ç' => 'c',
        'Ð' | 'ð' => 'd',
        'È' | 'É' | 'Ê' | 'Ë' => 'e',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'i',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'Ñ' | 'ñ' => 'n',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'o',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'Þ' | 'þ' => 't',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'u',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ý' | 'ý' | 'ÿ' => 'y',
        'ß' => 's',
        '×' => 'x',

        // Latin Extended-A
        'Ā' | 'ā' | 'Ă' | 'ă' | 'Ą' | 'ą' => 'a',
        'Ć' | 'ć' | 'Ĉ' | 'ĉ' | 'Ċ' | 'ċ' | 'Č' | 'č' => 'c',
        'Ď' | 'ď' | 'Đ' | 'đ' => 'd',
        'Ē' | 'ē' | 'Ĕ' | 'ĕ' | 'Ė' | 'ė' | 'Ę' | 'ę' | 'Ě' | 'ě' => 'e',
        'Ĝ' | 'ĝ' | 'Ğ' | 'ğ' | 'Ġ' | 'ġ' | 'Ģ' | 'ģ' => 'g',
        'Ĥ' | 'ĥ' | 'Ħ' | 'ħ' => 'h',
        'Ĩ' | 'ĩ' | 'Ī' | 'ī' | 'Ĭ' | 'ĭ' | 'Į' | 'į' | 'İ' | 'ı' | 'Ĳ' | 'ĳ' => 'i',
        'Ĵ' | 'ĵ' => 'j',
        'Ķ' | 'ķ' | 'ĸ' => 'k',
        'Ĺ' | 'ĺ' | 'Ļ' | 'ļ' | 'Ľ' | 'ľ' | 'Ŀ' | 'ŀ' | 'Ł' | 'ł' => 'l',
        'Ń' | 'ń' | 'Ņ' | 'ņ' | 'Ň' | 'ň' | 'ŉ' | 'Ŋ' | 'ŋ' => 'n',
        'Ō' | 'ō' | 'Ŏ' | 'ŏ' | 'Ő' | 'ő' | 'Œ' | 'œ' => 'o',
        'Ŕ' | 'ŕ' | 'Ŗ' | 'ŗ' | 'Ř' | 'ř' => 'r',
        'Ś' | 'ś' | 'Ŝ' | 'ŝ' | 'Ş' | 'ş' | 'Š' | 'š' | 'ſ' => 's',
        'Ţ' | 'ţ' | 'Ť' | 'ť' | 'Ŧ' | 'ŧ' => 't',
        'Ũ' | 'ũ' | 'Ū' | 'ū' | 'Ŭ' | 'ŭ' | 'Ů' | 'ů' | 'Ű' | 'ű' | 'Ų' | 'ų' => 'u',
        'Ŵ' | 'ŵ' => 'w',
        'Ŷ' | 'ŷ' | 'Ÿ' => 'y',
        'Ź' | 'ź' | 'Ż' | 'ż' | 'Ž' | 'ž' => 'z',

        _ => ch,
    }
}

/// Best-effort transliteration of a single character to a lowercase ASCII
/// letter, using `deunicode`.
///
/// Returns `None` when the transliteration is empty or does not start with
/// an ASCII letter (digits, punctuation, symbols, unknown code points).
///
/// ```rust
/// use smartdial_core::text::transliterate_letter;
///
/// assert_eq!(transliterate_letter('Ж'), Some('z'));
/// assert_eq!(transliterate_letter('Ω'), Some('o'));
/// assert_eq!(transliterate_letter('7'), None);
/// ```
pub fn transliterate_letter(ch: char) -> Option<char> {
    let ascii = deunicode::deunicode_char(ch)?;
    ascii
        .chars()
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
}

/// Collects a string into chars once so that callers can index by
/// character position. All match positions in this crate are char indices.
#[inline]
pub(crate) fn to_chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_uppercase_ascii() {
        for (upper, lower) in ('A'..='Z').zip('a'..='z') {
            assert_eq!(fold_latin_char(upper), lower);
        }
    }

    #[test]
    fn leaves_unmapped_characters_alone() {
        for ch in ['a', 'z', '0', '9', ' ', '-', '+', '(', 'Ж', '中'] {
            assert_eq!(fold_latin_char(ch), ch);
        }
    }

    #[test]
    fn fold_is_idempotent_over_latin_blocks() {
        let blocks = ('\u{0000}'..='\u{017F}').chain('A'..='Z');
        for ch in blocks {
            let once = fold_latin_char(ch);
            assert_eq!(fold_latin_char(once), once, "not idempotent for {ch:?}");
        }
    }

    #[test]
    fn folds_common_diacritics() {
        let folded: String = "Łódź Zürich Ørsted Çağrı".chars().map(fold_latin_char).collect();
        assert_eq!(folded, "lodz zurich orsted cagri");
    }

    #[test]
    fn transliteration_only_yields_letters() {
        assert_eq!(transliterate_letter('Σ'), Some('s'));
        assert_eq!(transliterate_letter('-'), None);
        assert_eq!(transliterate_letter(' '), None);
    }
}
