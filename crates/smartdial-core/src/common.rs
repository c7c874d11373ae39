// crates/smartdial-core/src/common.rs
use serde::{Deserialize, Serialize};

/// One searchable contact: a display name and an optional phone number.
///
/// Contacts are supplied by the caller (or read with
/// [`load_contacts`](crate::loader::load_contacts)); nothing in this crate
/// stores or indexes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    #[serde(default)]
    pub number: Option<String>,
}

impl Contact {
    pub fn new(name: impl Into<String>, number: Option<&str>) -> Self {
        Self {
            name: name.into(),
            number: number.map(str::to_owned),
        }
    }
}

/// Simple aggregate statistics for one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub scanned: usize,
    pub name_matches: usize,
    pub number_matches: usize,
}
