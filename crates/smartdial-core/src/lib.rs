// crates/smartdial-core/src/lib.rs

//! # smartdial-core
//!
//! Dialpad ("T9") matching of contacts: a query typed on a phone keypad,
//! like `5646`, is matched against display names ("**John** Smith"),
//! their initials ("**J**ohn **S**mith" for `57`) and phone numbers, with
//! the highlighted character ranges reported back.
//!
//! ```rust
//! use smartdial_core::{name_prefixes, LatinDialpadMap, MatcherConfig, SmartDialMatcher};
//!
//! let mut matcher = SmartDialMatcher::new("57");
//! assert!(matcher.matches("John Smith"));
//! assert_eq!(matcher.name_match_mask(), "1000010000");
//!
//! let prefixes = name_prefixes(&LatinDialpadMap, &MatcherConfig::default(), "John Smith");
//! assert_eq!(prefixes, vec!["76484", "564676484", "576484"]);
//! ```

pub mod common;
pub mod config;
pub mod dialpad;
pub mod error;
#[cfg(feature = "json")]
pub mod loader;
pub mod matcher;
pub mod phone;
pub mod position;
pub mod prefix;
pub mod region;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{Contact, SearchStats};
pub use crate::config::{MatcherConfig, DEFAULT_MATCHER_CONFIG};
pub use crate::dialpad::{
    CompositeDialpadMap, LatinDialpadMap, RussianDialpadMap, TransliteratingDialpadMap,
};
pub use crate::error::{Result, SmartDialError};
#[cfg(feature = "json")]
pub use crate::loader::load_contacts;
pub use crate::matcher::SmartDialMatcher;
pub use crate::phone::{normalize_number, number_prefixes, parse_phone_number, PhoneNumberTokens};
pub use crate::position::{advance_match_positions, highlight_mask, MatchPosition};
pub use crate::prefix::{name_prefixes, name_tokens};
pub use crate::region::{current_region, init_region, is_country_nanp, RegionSettings};
pub use crate::search::{search_contacts, SmartDialHit};
pub use crate::text::{fold_latin_char, transliterate_letter};
pub use crate::traits::DialpadMap;
