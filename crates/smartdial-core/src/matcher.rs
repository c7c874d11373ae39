// crates/smartdial-core/src/matcher.rs

//! # SmartDial Matcher
//!
//! Decides whether a dialpad query (a string of digits) can be produced by
//! typing a contact's display name or phone number, and where.
//!
//! Names are matched token-wise: the query must run from the start of some
//! token, possibly across separators into the following tokens ("37337"
//! finds "Fred S|mith"). When that fails, initials may stand in for whole
//! tokens ("57" finds "J|ohn S|mith"). A full token match always beats an
//! initials match. Initials and what follows them are limited to the
//! initials windows of [`MatcherConfig`], so a name matches exactly the
//! queries [`name_prefixes`](crate::prefix::name_prefixes) indexes it under.
//!
//! Numbers are matched as a digit prefix, first from the start of the raw
//! number, then after its calling code, then after its NANP area code.

use crate::config::MatcherConfig;
use crate::dialpad::LatinDialpadMap;
use crate::phone::{normalize_number, parse_phone_number};
use crate::position::{highlight_mask, MatchPosition};
use crate::region::{current_region, RegionSettings};
use crate::text::to_chars;
use crate::traits::DialpadMap;
use std::collections::HashSet;

/// Matches one query against any number of names and numbers.
///
/// The matcher holds the current query and the positions/masks of the last
/// match. It is not synchronized: share it across threads only behind a
/// lock, or give each thread its own instance.
///
/// ```rust
/// use smartdial_core::{MatchPosition, SmartDialMatcher};
///
/// let mut matcher = SmartDialMatcher::new("5646");
/// assert!(matcher.matches("John Smith"));
/// assert_eq!(matcher.match_positions(), &[MatchPosition::new(0, 4)]);
/// assert_eq!(matcher.name_match_mask(), "1111000000");
/// ```
#[derive(Debug, Clone)]
pub struct SmartDialMatcher<M: DialpadMap = LatinDialpadMap> {
    query: String,
    query_chars: Vec<char>,
    map: M,
    config: MatcherConfig,
    region: RegionSettings,
    match_positions: Vec<MatchPosition>,
    name_match_mask: String,
    number_match_mask: String,
}

impl SmartDialMatcher<LatinDialpadMap> {
    /// Latin keypad, default config, process-wide region settings.
    pub fn new(query: &str) -> Self {
        Self::with_map(query, LatinDialpadMap)
    }
}

impl<M: DialpadMap> SmartDialMatcher<M> {
    pub fn with_map(query: &str, map: M) -> Self {
        let mut matcher = Self {
            query: String::new(),
            query_chars: Vec::new(),
            map,
            config: MatcherConfig::default(),
            region: current_region().clone(),
            match_positions: Vec::new(),
            name_match_mask: String::new(),
            number_match_mask: String::new(),
        };
        matcher.set_query(query);
        matcher
    }

    pub fn with_config(mut self, config: MatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the process-wide region settings for this matcher.
    pub fn with_region(mut self, region: RegionSettings) -> Self {
        self.region = region;
        self
    }

    /// The normalized query (digits only).
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query. Anything that is not a digit is dropped.
    pub fn set_query(&mut self, query: &str) {
        self.query = normalize_number(&self.map, query, 0);
        self.query_chars = to_chars(&self.query);
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn region(&self) -> &RegionSettings {
        &self.region
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    /// Matches the current query against `display_name`, remembering the
    /// positions and the highlight mask.
    pub fn matches(&mut self, display_name: &str) -> bool {
        let positions = self.match_name_chars(&to_chars(display_name), &self.query_chars);
        let len = display_name.chars().count();
        match positions {
            Some(positions) => {
                log::trace!("{:?} matches name {display_name:?} at {positions:?}", self.query);
                self.name_match_mask = highlight_mask(len, &positions);
                self.match_positions = positions;
                true
            }
            None => {
                self.name_match_mask = highlight_mask(len, &[]);
                self.match_positions.clear();
                false
            }
        }
    }

    /// Positions found by the last successful [`matches`](Self::matches).
    pub fn match_positions(&self) -> &[MatchPosition] {
        &self.match_positions
    }

    /// `'1'` under every matched character of the last name, `'0'` elsewhere.
    pub fn name_match_mask(&self) -> &str {
        &self.name_match_mask
    }

    /// Matches the current query against a raw phone number, trying the
    /// NANP alignment too.
    pub fn matches_number(&mut self, phone_number: &str) -> Option<MatchPosition> {
        let query = std::mem::take(&mut self.query_chars);
        let result = self.record_number_match(phone_number, &query, true);
        self.query_chars = query;
        result
    }

    /// Matches an explicit query against a raw phone number. The query is
    /// normalized first; the matcher's own query is left alone.
    pub fn matches_number_with(
        &mut self,
        phone_number: &str,
        query: &str,
        allow_nanp: bool,
    ) -> Option<MatchPosition> {
        let query = to_chars(&normalize_number(&self.map, query, 0));
        self.record_number_match(phone_number, &query, allow_nanp)
    }

    /// `'1'` under every matched character of the last number.
    pub fn number_match_mask(&self) -> &str {
        &self.number_match_mask
    }

    /// Stateless name match: the positions where `query` (normalized first)
    /// matches `display_name`, or `None`.
    pub fn matches_combination(&self, display_name: &str, query: &str) -> Option<Vec<MatchPosition>> {
        let query = to_chars(&normalize_number(&self.map, query, 0));
        self.match_name_chars(&to_chars(display_name), &query)
    }

    /// Stateless number match with the current query.
    pub fn match_number(&self, phone_number: &str, allow_nanp: bool) -> Option<MatchPosition> {
        self.match_number_chars(phone_number, &self.query_chars, allow_nanp)
    }

    fn record_number_match(
        &mut self,
        phone_number: &str,
        query: &[char],
        allow_nanp: bool,
    ) -> Option<MatchPosition> {
        let result = self.match_number_chars(phone_number, query, allow_nanp);
        let len = phone_number.chars().count();
        let positions: &[MatchPosition] = match &result {
            Some(pos) => std::slice::from_ref(pos),
            None => &[],
        };
        self.number_match_mask = highlight_mask(len, positions);
        result
    }

    fn match_name_chars(&self, name: &[char], query: &[char]) -> Option<Vec<MatchPosition>> {
        // `match_empty_query` only applies to numbers.
        if query.is_empty() || name.len() < query.len() {
            return None;
        }
        NameSearch::new(&self.map, &self.config, name, query).run()
    }

    fn match_number_chars(
        &self,
        phone_number: &str,
        query: &[char],
        allow_nanp: bool,
    ) -> Option<MatchPosition> {
        let number = to_chars(phone_number);
        if number.is_empty() {
            return self.config.match_empty_query.then(|| MatchPosition::new(0, 0));
        }
        if let Some(pos) = self.match_number_at(&number, query, 0) {
            return Some(pos);
        }

        let tokens = parse_phone_number(&self.map, &self.region, phone_number);
        if tokens.country_code_offset != 0 {
            if let Some(pos) = self.match_number_at(&number, query, tokens.country_code_offset) {
                return Some(pos);
            }
        }
        if allow_nanp && tokens.nanp_code_offset != 0 {
            return self.match_number_at(&number, query, tokens.nanp_code_offset);
        }
        None
    }

    /// Aligns `query` with the digits of `number` starting at `offset`.
    ///
    /// Separators are skipped. Separators before the first matched digit
    /// are left out of the span, except when aligning from offset 0 where
    /// they are kept ("(510" highlights the parenthesis too).
    fn match_number_at(&self, number: &[char], query: &[char], offset: usize) -> Option<MatchPosition> {
        if query.is_empty() {
            return self
                .config
                .match_empty_query
                .then(|| MatchPosition::new(offset, offset));
        }
        let mut start = offset;
        let mut end = offset;
        let mut query_at = 0;
        for &ch in number.iter().skip(offset) {
            if query_at == query.len() {
                break;
            }
            if self.map.is_numeric(ch) {
                if ch != query[query_at] {
                    return None;
                }
                query_at += 1;
            } else if query_at == 0 && offset != 0 {
                start += 1;
            }
            end += 1;
        }
        // Number ran out before the query did.
        if query_at < query.len() {
            return None;
        }
        Some(MatchPosition::new(start, end))
    }
}

/// Token `[start, end)` of a name: a maximal run of dialable characters.
#[derive(Debug, Clone, Copy)]
struct TokenSpan {
    start: usize,
    end: usize,
}

/// One name match.
///
/// A query is accepted in one of two shapes, the same two families
/// [`name_prefixes`](crate::prefix::name_prefixes) indexes:
///
/// 1. A prefix of the digits of tokens `i..n`, read contiguously from the
///    start of some token `i`.
/// 2. One or more initials of window tokens in increasing order, followed
///    by a prefix of the window chain: the window tokens (plus the last
///    token) from some later token on.
///
/// Failed `(next token, query offset)` states of the second family are
/// memoized.
struct NameSearch<'a> {
    config: &'a MatcherConfig,
    query: &'a [char],
    digits: Vec<char>,
    tokens: Vec<TokenSpan>,
    chain: Vec<usize>,
    failed: HashSet<(usize, usize)>,
}

impl<'a> NameSearch<'a> {
    fn new<M: DialpadMap + ?Sized>(
        map: &M,
        config: &'a MatcherConfig,
        name: &[char],
        query: &'a [char],
    ) -> Self {
        let mut digits = Vec::with_capacity(name.len());
        let mut tokens: Vec<TokenSpan> = Vec::new();
        let mut in_token = false;
        for (i, &raw) in name.iter().enumerate() {
            let ch = map.normalize_character(raw);
            let is_dialable = map.is_dialable(ch);
            if is_dialable && !in_token {
                tokens.push(TokenSpan { start: i, end: i + 1 });
            } else if let (true, Some(token)) = (is_dialable, tokens.last_mut()) {
                token.end = i + 1;
            }
            in_token = is_dialable;
            digits.push(map.digit_char(ch));
        }

        let count = tokens.len();
        let chain = (0..count)
            .filter(|&i| i + 1 == count || config.token_allows_initial(i, count))
            .collect();
        Self {
            config,
            query,
            digits,
            tokens,
            chain,
            failed: HashSet::new(),
        }
    }

    fn run(mut self) -> Option<Vec<MatchPosition>> {
        if let Some(full) = self.full_match() {
            return Some(full);
        }
        if !self.config.allow_initial_match {
            return None;
        }
        self.initials(0, 0)
    }

    /// Leftmost token from which the whole query reads contiguously.
    fn full_match(&self) -> Option<Vec<MatchPosition>> {
        (0..self.tokens.len()).find_map(|i| self.consume(i..self.tokens.len(), 0))
    }

    /// Reads `query[query_from..]` through the given tokens in order. Runs
    /// of adjacent tokens share one position, separators included.
    fn consume(
        &self,
        token_ids: impl IntoIterator<Item = usize>,
        query_from: usize,
    ) -> Option<Vec<MatchPosition>> {
        let query = &self.query[query_from..];
        let mut query_at = 0;
        let mut positions: Vec<MatchPosition> = Vec::new();
        let mut previous: Option<usize> = None;

        for id in token_ids {
            let token = self.tokens[id];
            let mut end = token.start;
            for at in token.start..token.end {
                if query_at == query.len() {
                    break;
                }
                if self.digits[at] != query[query_at] {
                    return None;
                }
                query_at += 1;
                end = at + 1;
            }
            if previous.is_some_and(|p| p + 1 == id) {
                if let Some(last) = positions.last_mut() {
                    last.end = end;
                }
            } else {
                positions.push(MatchPosition::new(token.start, end));
            }
            previous = Some(id);
            if query_at == query.len() {
                return Some(positions);
            }
        }
        None
    }

    /// Takes a leading piece of some window token at or after `first_token`
    /// (never the last token) as an initial, then continues after it.
    fn initials(&mut self, first_token: usize, query_from: usize) -> Option<Vec<MatchPosition>> {
        let count = self.tokens.len();
        for id in first_token..count.saturating_sub(1) {
            if !self.config.token_allows_initial(id, count) {
                continue;
            }
            let token = self.tokens[id];
            let longest = self
                .config
                .initial_length_limit
                .min(token.end - token.start)
                .min(self.query.len() - query_from);
            for len in 1..=longest {
                let initial = &self.digits[token.start..token.start + len];
                if initial != &self.query[query_from..query_from + len] {
                    break;
                }
                if let Some(mut rest) = self.after_initial(id + 1, query_from + len) {
                    rest.insert(0, MatchPosition::new(token.start, token.start + len));
                    return Some(rest);
                }
            }
        }
        None
    }

    /// Matches the rest of the query once an initial ended before
    /// `next_token`: either the window chain from a later token, or more
    /// initials.
    fn after_initial(&mut self, next_token: usize, query_from: usize) -> Option<Vec<MatchPosition>> {
        if query_from == self.query.len() {
            return Some(Vec::new());
        }
        if self.failed.contains(&(next_token, query_from)) {
            return None;
        }

        let first_link = self.chain.partition_point(|&id| id < next_token);
        for link in first_link..self.chain.len() {
            let chained = self.chain[link..].iter().copied();
            if let Some(positions) = self.consume(chained, query_from) {
                return Some(positions);
            }
        }
        if let Some(positions) = self.initials(next_token, query_from) {
            return Some(positions);
        }

        self.failed.insert((next_token, query_from));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MATCHER_CONFIG;
    use crate::prefix::name_prefixes;

    fn dial(s: &str) -> String {
        s.chars().map(|c| LatinDialpadMap.digit_char(c)).collect()
    }

    fn positions(name: &str, letters: &str) -> Option<Vec<MatchPosition>> {
        SmartDialMatcher::new("").matches_combination(name, &dial(letters))
    }

    fn p(start: usize, end: usize) -> MatchPosition {
        MatchPosition::new(start, end)
    }

    #[test]
    fn query_is_normalized() {
        let matcher = SmartDialMatcher::new("(555) 12-3");
        assert_eq!(matcher.query(), "555123");
    }

    #[test]
    fn full_token_match() {
        assert_eq!(positions("John Smith", "john"), Some(vec![p(0, 4)]));
        assert_eq!(positions("John Smith", "jo"), Some(vec![p(0, 2)]));
        assert_eq!(positions("John Smith", "smith"), Some(vec![p(5, 10)]));
    }

    #[test]
    fn match_crosses_separators() {
        assert_eq!(positions("Fred Smith", "freds"), Some(vec![p(0, 6)]));
        assert_eq!(positions("Mary-Ann O'Neil", "maryanno"), Some(vec![p(0, 10)]));
    }

    #[test]
    fn leading_separators_are_not_highlighted() {
        assert_eq!(positions("  (Bob)", "bob"), Some(vec![p(3, 6)]));
    }

    #[test]
    fn only_token_prefixes_match() {
        assert_eq!(positions("John Smith", "ohn"), None);
        assert_eq!(positions("John Smith", "mith"), None);
    }

    #[test]
    fn restarts_on_token_boundary_mismatch() {
        assert_eq!(positions("Yo-Yoghurt", "yog"), Some(vec![p(3, 6)]));
        // Reading on from "A" fails inside "Abad"; "Abad" alone matches.
        assert_eq!(positions("A Abad", "abad"), Some(vec![p(2, 6)]));
    }

    #[test]
    fn initials_match() {
        assert_eq!(positions("John Smith", "js"), Some(vec![p(0, 1), p(5, 6)]));
        assert_eq!(positions("Eve Gray", "eg"), Some(vec![p(0, 1), p(4, 5)]));
        assert_eq!(
            positions("John Smith", "jsmi"),
            Some(vec![p(0, 1), p(5, 8)])
        );
    }

    #[test]
    fn full_match_beats_initials() {
        // "Ed" spells 33, the same digits as the initials of "Ed Foster".
        assert_eq!(positions("Ed Foster", "ef"), Some(vec![p(0, 2)]));
    }

    #[test]
    fn initials_outside_windows_are_ignored() {
        let name = "Adam Dave Gina Jack Mike Pete";
        assert_eq!(positions(name, "gp"), None);
        assert_eq!(positions(name, "jp"), None);
        assert_eq!(positions(name, "ap"), Some(vec![p(0, 1), p(25, 26)]));
        assert_eq!(positions(name, "mp"), Some(vec![p(20, 21), p(25, 26)]));
        assert_eq!(
            positions(name, "adp"),
            Some(vec![p(0, 1), p(5, 6), p(25, 26)])
        );
    }

    #[test]
    fn initials_only_continue_along_the_window_chain() {
        let name = "Adam Dave Gina Jack Mike Pete";
        // Gina and Jack are neither initials nor chain links.
        assert_eq!(positions(name, "ag"), None);
        assert_eq!(positions(name, "dg"), None);
        assert_eq!(positions(name, "aj"), None);
        // The chain after "A" runs Dave, Mike, Pete.
        assert_eq!(
            positions(name, "adavem"),
            Some(vec![p(0, 1), p(5, 9), p(20, 21)])
        );
    }

    #[test]
    fn matcher_accepts_exactly_the_indexed_prefixes() {
        let config = MatcherConfig::default();
        let matcher = SmartDialMatcher::new("").with_config(config);
        let keys: Vec<char> = ('2'..='9').collect();
        let mut queries = Vec::new();
        let mut frontier = vec![String::new()];
        for _ in 0..3 {
            frontier = frontier
                .iter()
                .flat_map(|q| keys.iter().map(move |k| format!("{q}{k}")))
                .collect();
            queries.extend(frontier.iter().cloned());
        }

        for name in [
            "Adam Dave Gina Jack Mike Pete",
            "Albert Ben Charles Daniel Ed Foster",
            "John Smith",
        ] {
            let index = name_prefixes(&LatinDialpadMap, &config, name);
            for query in &queries {
                let indexed = index.iter().any(|prefix| prefix.starts_with(query.as_str()));
                let matched = matcher.matches_combination(name, query);
                assert_eq!(indexed, matched.is_some(), "{query} on {name}: {matched:?}");
            }
        }
    }

    #[test]
    fn longer_initials_follow_the_limit() {
        let config = MatcherConfig {
            initial_length_limit: 2,
            ..DEFAULT_MATCHER_CONFIG
        };
        let matcher = SmartDialMatcher::new("").with_config(config);
        assert_eq!(
            matcher.matches_combination("John Smith", &dial("jos")),
            Some(vec![p(0, 2), p(5, 6)])
        );
        assert_eq!(positions("John Smith", "jos"), None);
    }

    #[test]
    fn empty_query_never_matches_a_name() {
        let config = MatcherConfig {
            match_empty_query: true,
            ..DEFAULT_MATCHER_CONFIG
        };
        let mut matcher = SmartDialMatcher::new("").with_config(config);
        assert!(!matcher.matches("John Smith"));
        assert_eq!(matcher.matches_combination("John Smith", ""), None);
    }

    #[test]
    fn initials_can_be_disabled() {
        let config = MatcherConfig {
            allow_initial_match: false,
            ..DEFAULT_MATCHER_CONFIG
        };
        let matcher = SmartDialMatcher::new("").with_config(config);
        assert_eq!(matcher.matches_combination("John Smith", &dial("js")), None);
        assert!(matcher.matches_combination("John Smith", &dial("john")).is_some());
    }

    #[test]
    fn first_found_initials_candidate_wins() {
        // Both "A..S" and "B..S" spell 27; the earlier token is kept.
        assert_eq!(
            positions("Al Bo Sam", "as"),
            Some(vec![p(0, 1), p(6, 7)])
        );
    }

    #[test]
    fn longer_query_than_name_never_matches() {
        assert_eq!(positions("Al", "alan"), None);
        assert_eq!(positions("A B", "abc"), None);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(positions("John", ""), None);
        assert_eq!(positions("", "j"), None);
        let mut matcher = SmartDialMatcher::new("");
        assert!(!matcher.matches("John"));
        assert_eq!(matcher.name_match_mask(), "0000");
    }

    #[test]
    fn accented_names_match_plain_digits() {
        assert_eq!(positions("Zoë Łukasz", "zoe"), Some(vec![p(0, 3)]));
        assert_eq!(positions("Zoë Łukasz", "luk"), Some(vec![p(4, 7)]));
    }

    #[test]
    fn name_mask_tracks_last_call() {
        let mut matcher = SmartDialMatcher::new(&dial("js"));
        assert!(matcher.matches("John Smith"));
        assert_eq!(matcher.name_match_mask(), "1000010000");
        assert!(!matcher.matches("Alice"));
        assert_eq!(matcher.name_match_mask(), "00000");
        assert!(matcher.match_positions().is_empty());
    }

    #[test]
    fn fifty_single_character_tokens_stay_fast() {
        let name = vec!["a"; 50].join(" ");
        let query = format!("{}3", "2".repeat(12));
        let started = std::time::Instant::now();
        let matcher = SmartDialMatcher::new("");
        assert_eq!(matcher.matches_combination(&name, &query), None);

        // Every token eligible for initials: each one opens a speculative
        // branch.
        let config = MatcherConfig {
            first_tokens_for_initials: 50,
            last_tokens_for_initials: 50,
            ..DEFAULT_MATCHER_CONFIG
        };
        let matcher = SmartDialMatcher::new("").with_config(config);
        assert_eq!(matcher.matches_combination(&name, &query), None);
        assert!(started.elapsed() < std::time::Duration::from_secs(2));
    }

    fn us() -> RegionSettings {
        RegionSettings::for_country("US")
    }

    #[test]
    fn number_direct_match_includes_leading_separators() {
        let mut matcher = SmartDialMatcher::new("5551234567").with_region(us());
        let pos = matcher.matches_number("(555) 123-4567");
        assert_eq!(pos, Some(p(0, 14)));
        assert_eq!(matcher.number_match_mask(), "11111111111111");

        let pos = SmartDialMatcher::new("555").match_number("(555) 123-4567", true);
        assert_eq!(pos, Some(p(0, 4)));
    }

    #[test]
    fn number_mismatch() {
        let matcher = SmartDialMatcher::new("556").with_region(us());
        assert_eq!(matcher.match_number("(555) 123-4567", true), None);
    }

    #[test]
    fn number_after_country_code() {
        let matcher = SmartDialMatcher::new("2071").with_region(us());
        assert_eq!(matcher.match_number("+44 20 7123 4567", true), Some(p(4, 9)));
    }

    #[test]
    fn number_after_nanp_area_code() {
        let mut matcher = SmartDialMatcher::new("1234567").with_region(us());
        let pos = matcher.matches_number("+1 (555) 123-4567");
        assert_eq!(pos, Some(p(9, 17)));
        assert_eq!(matcher.number_match_mask(), "00000000011111111");

        assert_eq!(matcher.match_number("+1 (555) 123-4567", false), None);
    }

    #[test]
    fn number_nanp_needs_nanp_user() {
        let matcher = SmartDialMatcher::new("1234567").with_region(RegionSettings::for_country("GB"));
        assert_eq!(matcher.match_number("(555) 123-4567", true), None);
    }

    #[test]
    fn number_shorter_than_query() {
        let matcher = SmartDialMatcher::new("12345");
        assert_eq!(matcher.match_number("123", true), None);
    }

    #[test]
    fn number_with_explicit_query() {
        let mut matcher = SmartDialMatcher::new("999").with_region(us());
        assert_eq!(matcher.matches_number_with("555-0100", "555", false), Some(p(0, 3)));
        assert_eq!(matcher.query(), "999");
        assert_eq!(matcher.number_match_mask(), "11100000");
    }

    #[test]
    fn empty_number_and_query_policy() {
        let mut matcher = SmartDialMatcher::new("");
        assert_eq!(matcher.matches_number("555"), None);
        assert_eq!(matcher.matches_number(""), None);

        let config = MatcherConfig {
            match_empty_query: true,
            ..DEFAULT_MATCHER_CONFIG
        };
        let mut matcher = SmartDialMatcher::new("").with_config(config);
        assert_eq!(matcher.matches_number("555"), Some(p(0, 0)));
        assert_eq!(matcher.matches_number(""), Some(p(0, 0)));
    }
}
