// crates/smartdial-core/src/search.rs

//! Linear dialpad search over an in-memory contact list.

use crate::common::{Contact, SearchStats};
use crate::config::MatcherConfig;
use crate::matcher::SmartDialMatcher;
use crate::position::MatchPosition;
use crate::region::RegionSettings;
use serde::Serialize;

/// A contact that matched the query, with what to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmartDialHit<'a> {
    pub contact: &'a Contact,
    /// Name positions; empty when only the number matched.
    pub name_positions: Vec<MatchPosition>,
    pub name_mask: String,
    pub number_position: Option<MatchPosition>,
    pub number_mask: Option<String>,
}

impl SmartDialHit<'_> {
    pub fn matched_name(&self) -> bool {
        !self.name_positions.is_empty()
    }
}

/// Runs `query` against every contact's name and number.
///
/// Contacts matching by name come first, number-only matches after; within
/// each group the input order is kept.
pub fn search_contacts<'a>(
    contacts: &'a [Contact],
    query: &str,
    config: MatcherConfig,
    region: &RegionSettings,
) -> (Vec<SmartDialHit<'a>>, SearchStats) {
    let mut matcher = SmartDialMatcher::new(query)
        .with_config(config)
        .with_region(region.clone());
    let mut stats = SearchStats::default();
    let mut by_name = Vec::new();
    let mut by_number = Vec::new();

    for contact in contacts {
        stats.scanned += 1;
        let name_hit = matcher.matches(&contact.name);
        let number_position = contact
            .number
            .as_deref()
            .and_then(|n| matcher.matches_number(n));

        if !name_hit && number_position.is_none() {
            continue;
        }
        if name_hit {
            stats.name_matches += 1;
        }
        if number_position.is_some() {
            stats.number_matches += 1;
        }

        let hit = SmartDialHit {
            contact,
            name_positions: matcher.match_positions().to_vec(),
            name_mask: matcher.name_match_mask().to_string(),
            number_position,
            number_mask: number_position.map(|_| matcher.number_match_mask().to_string()),
        };
        if name_hit {
            by_name.push(hit);
        } else {
            by_number.push(hit);
        }
    }

    log::debug!(
        "search {:?}: scanned={} name={} number={}",
        matcher.query(),
        stats.scanned,
        stats.name_matches,
        stats.number_matches
    );
    by_name.extend(by_number);
    (by_name, stats)
}
