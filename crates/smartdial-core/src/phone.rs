// crates/smartdial-core/src/phone.rs

//! # Phone Number Tokenizer
//!
//! Finds the international calling code and the NANP area code inside a
//! raw, formatted phone number so the matcher can also align a query after
//! them ("5551234" against "+1 (555) 123-4567" skipping the `1`, or
//! "1234567" skipping the area code as well).
//!
//! Offsets are character indices into the raw string. Zero means "not
//! present" for both of them.

use crate::region::{is_valid_country_code, RegionSettings};
use crate::text::to_chars;
use crate::traits::DialpadMap;
use serde::{Deserialize, Serialize};

/// Longest calling code tried after a leading `+`.
const MAX_COUNTRY_CODE_LEN: usize = 3;

/// Country code and area code positions detected in one raw phone number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberTokens {
    /// Calling code without `+`, empty when none was detected.
    pub country_code: String,
    /// Index just after the calling code, 0 if none.
    pub country_code_offset: usize,
    /// Index just after the NANP area code, 0 if none.
    pub nanp_code_offset: usize,
}

impl PhoneNumberTokens {
    pub fn has_country_code(&self) -> bool {
        !self.country_code.is_empty()
    }
}

/// Keeps only the numeric characters of `number`, starting at char index
/// `offset`. Formatting (spaces, dashes, parentheses, `+`, letters) is
/// dropped; relative order is kept.
///
/// ```rust
/// use smartdial_core::{normalize_number, LatinDialpadMap};
///
/// assert_eq!(normalize_number(&LatinDialpadMap, "+1 (555) 123-4567", 0), "15551234567");
/// assert_eq!(normalize_number(&LatinDialpadMap, "+1 (555) 123-4567", 3), "5551234567");
/// ```
pub fn normalize_number<M: DialpadMap + ?Sized>(map: &M, number: &str, offset: usize) -> String {
    number
        .chars()
        .skip(offset)
        .filter(|&ch| map.is_numeric(ch))
        .collect()
}

/// Detects the calling code and NANP area code of `number`.
///
/// - A leading `+` is followed by the shortest valid calling code of 1 to 3
///   digits (at least one character must follow it).
/// - Without `+`, an 11-digit number starting with `1` is read as `+1` when
///   the user is in a NANP region.
/// - For NANP users, a 10-digit number without calling code, or an 11-digit
///   number with calling code `1`, has its 3-digit area code located in the
///   raw string.
///
/// Empty input yields the empty tokenization.
pub fn parse_phone_number<M: DialpadMap + ?Sized>(
    map: &M,
    region: &RegionSettings,
    number: &str,
) -> PhoneNumberTokens {
    let chars = to_chars(number);
    let mut tokens = PhoneNumberTokens::default();
    if chars.is_empty() {
        return tokens;
    }
    let normalized: Vec<char> = chars.iter().copied().filter(|&c| map.is_numeric(c)).collect();

    if chars[0] == '+' {
        for len in 1..=MAX_COUNTRY_CODE_LEN {
            if chars.len() <= len + 1 {
                break;
            }
            let candidate: String = chars[1..=len].iter().collect();
            if is_valid_country_code(&candidate) {
                tokens.country_code = candidate;
                tokens.country_code_offset = len + 1;
                break;
            }
        }
    } else if normalized.len() == 11 && normalized[0] == '1' && region.user_in_nanp {
        tokens.country_code = "1".to_string();
        // Position of the second digit: everything before it is the "1" and
        // its formatting.
        tokens.country_code_offset = chars
            .iter()
            .enumerate()
            .filter(|&(_, &c)| map.is_numeric(c))
            .nth(1)
            .map(|(i, _)| i)
            .unwrap_or(0);
    }

    if region.user_in_nanp {
        let area_code = match (tokens.country_code.as_str(), normalized.len()) {
            ("", 10) => Some(&normalized[0..3]),
            ("1", 11) => Some(&normalized[1..4]),
            _ => None,
        };
        if let Some(area) = area_code {
            let from = tokens.country_code_offset;
            if let Some(idx) = find_run(&chars[from..], area) {
                tokens.nanp_code_offset = from + idx + area.len();
            }
        }
    }

    tokens
}

/// Index of the first occurrence of `needle` as a contiguous run in `hay`.
fn find_run(hay: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || hay.len() < needle.len() {
        return None;
    }
    hay.windows(needle.len()).position(|w| w == needle)
}

/// Digit strings under which a phone number can be found: the full number,
/// the number after its calling code and the local number after a NANP
/// area code. Any prefix of any entry finds the number.
///
/// For a NANP user, `+1 555-302-3029` yields `15553023029`, `5553023029`
/// and `3023029`.
pub fn number_prefixes<M: DialpadMap + ?Sized>(
    map: &M,
    region: &RegionSettings,
    number: &str,
) -> Vec<String> {
    let mut result = Vec::new();
    if number.is_empty() {
        return result;
    }
    result.push(normalize_number(map, number, 0));

    let tokens = parse_phone_number(map, region, number);
    if tokens.country_code_offset != 0 {
        result.push(normalize_number(map, number, tokens.country_code_offset));
    }
    if tokens.nanp_code_offset != 0 {
        result.push(normalize_number(map, number, tokens.nanp_code_offset));
    }
    result
}
