// crates/smartdial-core/src/prefix.rs

//! # Name Tokenizer & Prefix Generator
//!
//! Turns a display name into dialpad digit tokens and into the list of
//! digit strings an index can store for it: any prefix of any returned
//! string is a valid way to type the name.

use crate::config::MatcherConfig;
use crate::traits::DialpadMap;

/// Splits `name` into runs of dialable characters and spells each run in
/// keypad digits.
///
/// ```rust
/// use smartdial_core::{name_tokens, LatinDialpadMap};
///
/// assert_eq!(name_tokens(&LatinDialpadMap, "John Smith"), vec!["5646", "76484"]);
/// assert_eq!(name_tokens(&LatinDialpadMap, "  O'Brien--Ré "), vec!["6", "27436", "73"]);
/// ```
pub fn name_tokens<M: DialpadMap + ?Sized>(map: &M, name: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in name.chars() {
        let ch = map.normalize_character(ch);
        match map.digit_index(ch) {
            Some(d) => current.push(char::from(b'0' + d)),
            None => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Digit strings under which `name` can be found.
///
/// Two families are produced, in this order:
///
/// 1. Suffix chains of whole tokens, from the last token backwards:
///    "Foster", "EdFoster", "BenEdFoster", ... so the last name alone or
///    any run of consecutive tokens up to the end can be typed.
/// 2. Initials chains. Walking from the second-to-last token backwards,
///    each token inside the leading or trailing initials window (see
///    [`MatcherConfig`]) contributes its initial (its first digit, or up to
///    `initial_length_limit` leading digits), prepended to every full chain
///    and every initials chain built so far. Tokens outside both windows
///    never contribute an initial, and are left out of the full chains the
///    initials are prepended to. Nothing of this family is produced when
///    `allow_initial_match` is off.
///
/// [`SmartDialMatcher`](crate::matcher::SmartDialMatcher) accepts exactly
/// the queries that are a prefix of one of these strings.
///
/// For "Albert Ben Charles Daniel Ed Foster" with the default windows,
/// "EF", "BEF" and "ABEF" are reachable; "Charles" and "Daniel" never
/// contribute an initial.
pub fn name_prefixes<M: DialpadMap + ?Sized>(
    map: &M,
    config: &MatcherConfig,
    name: &str,
) -> Vec<String> {
    let tokens = name_tokens(map, name);
    let mut result = Vec::new();
    let Some(last) = tokens.last() else {
        return result;
    };

    let mut full_name = String::new();
    for token in tokens.iter().rev() {
        full_name.insert_str(0, token);
        result.push(full_name.clone());
    }

    if !config.allow_initial_match {
        return result;
    }

    let mut full_names = vec![last.clone()];
    let initials_start = result.len();
    let mut initials_end = result.len();
    let count = tokens.len();
    for i in (0..count - 1).rev() {
        if !config.token_allows_initial(i, count) {
            continue;
        }
        // Tokens are ASCII digits, so byte and char lengths agree.
        let longest = config.initial_length_limit.min(tokens[i].len());
        for len in 1..=longest {
            let initial = &tokens[i][..len];
            for chain in &full_names {
                result.push(format!("{initial}{chain}"));
            }
            for j in initials_start..initials_end {
                let chained = format!("{initial}{}", result[j]);
                result.push(chained);
            }
        }
        initials_end = result.len();

        let longest = format!("{}{}", tokens[i], full_names[full_names.len() - 1]);
        full_names.push(longest);
    }

    result
}
