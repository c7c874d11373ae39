// crates/smartdial-core/src/region.rs

//! # Region Settings
//!
//! Static calling-code tables plus the process-wide "is the user in a NANP
//! country" switch consulted by the phone number tokenizer.
//!
//! The process-wide settings are installed once at startup
//! ([`init_region`]) and only read afterwards. Code that runs before
//! installation sees [`RegionSettings::default`] (not in NANP).

use crate::error::{Result, SmartDialError};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

static REGION: OnceCell<RegionSettings> = OnceCell::new();
static DEFAULT_REGION: RegionSettings = RegionSettings {
    sim_country_iso: None,
    user_in_nanp: false,
};

/// ISO 3166-1 alpha-2 codes of the countries and territories in the North
/// American Numbering Plan.
pub const NANP_COUNTRIES: &[&str] = &[
    "US", "CA", "AS", "AI", "AG", "BS", "BB", "BM", "VG", "KY", "DM", "DO", "GD", "GU", "JM",
    "PR", "MS", "MP", "KN", "LC", "VC", "TT", "TC", "VI",
];

/// International calling codes that may follow a leading `+`.
/// Sorted (lexicographically) for binary search.
pub const COUNTRY_CODES: &[&str] = &[
    "1", "20", "211", "212", "213", "216", "218", "220", "221", "222", "223", "224", "225",
    "226", "227", "228", "229", "230", "231", "232", "233", "234", "235", "236", "237", "238",
    "239", "240", "241", "242", "243", "244", "245", "246", "247", "248", "249", "250", "251",
    "252", "253", "254", "255", "256", "257", "258", "260", "261", "262", "263", "264", "265",
    "266", "267", "268", "269", "27", "290", "291", "297", "298", "299", "30", "31", "32",
    "33", "34", "350", "351", "352", "353", "354", "355", "356", "357", "358", "359", "36",
    "370", "371", "372", "373", "374", "375", "376", "377", "378", "380", "381", "382", "383",
    "385", "386", "387", "389", "39", "40", "41", "420", "421", "423", "43", "44", "45", "46",
    "47", "48", "49", "500", "501", "502", "503", "504", "505", "506", "507", "508", "509",
    "51", "52", "53", "54", "55", "56", "57", "58", "590", "591", "592", "593", "594", "595",
    "596", "597", "598", "599", "60", "61", "62", "63", "64", "65", "66", "670", "672", "673",
    "674", "675", "676", "677", "678", "679", "680", "681", "682", "683", "685", "686", "687",
    "688", "689", "690", "691", "692", "7", "81", "82", "84", "850", "852", "853", "855",
    "856", "86", "880", "886", "90", "91", "92", "93", "94", "95", "960", "961", "962", "963",
    "964", "965", "966", "967", "968", "970", "971", "972", "973", "974", "975", "976", "977",
    "98", "992", "993", "994", "995", "996", "998",
];

/// True if `code` is a known international calling code (without `+`).
pub fn is_valid_country_code(code: &str) -> bool {
    COUNTRY_CODES
        .binary_search_by(|probe| (*probe).cmp(code))
        .is_ok()
}

/// True if the ISO2 country uses the North American Numbering Plan.
/// Case-insensitive; `None` and unknown codes are not NANP.
pub fn is_country_nanp(country_iso: Option<&str>) -> bool {
    match country_iso.map(str::trim) {
        Some(iso) if !iso.is_empty() => NANP_COUNTRIES
            .iter()
            .any(|c| c.eq_ignore_ascii_case(iso)),
        _ => false,
    }
}

/// Where the user is dialing from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSettings {
    /// ISO2 country of the SIM card, upper-cased, if known.
    #[serde(default)]
    pub sim_country_iso: Option<String>,
    /// Whether numbers should also be tried against the NANP layout.
    #[serde(default)]
    pub user_in_nanp: bool,
}

impl RegionSettings {
    /// Settings for a known SIM country.
    pub fn for_country(country_iso: &str) -> Self {
        Self::detect(Some(country_iso), None)
    }

    /// Resolves the user's country the way a phone would at startup: the
    /// live SIM country when available, otherwise the last country that was
    /// stored from an earlier run.
    ///
    /// ```rust
    /// use smartdial_core::RegionSettings;
    ///
    /// let region = RegionSettings::detect(None, Some("ca"));
    /// assert_eq!(region.sim_country_iso.as_deref(), Some("CA"));
    /// assert!(region.user_in_nanp);
    /// ```
    pub fn detect(sim_country: Option<&str>, stored_country: Option<&str>) -> Self {
        let pick = |s: Option<&str>| {
            s.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_ascii_uppercase)
        };
        let sim_country_iso = pick(sim_country).or_else(|| pick(stored_country));
        let user_in_nanp = is_country_nanp(sim_country_iso.as_deref());
        Self {
            sim_country_iso,
            user_in_nanp,
        }
    }

    /// Explicit override, bypassing country detection.
    pub fn with_nanp(mut self, user_in_nanp: bool) -> Self {
        self.user_in_nanp = user_in_nanp;
        self
    }
}

/// Installs the process-wide region settings.
///
/// Must happen before any matcher reads them; a second call fails with
/// [`SmartDialError::RegionAlreadyInitialized`] and leaves the first value
/// in place.
pub fn init_region(settings: RegionSettings) -> Result<()> {
    log::debug!(
        "installing region settings: country={:?} nanp={}",
        settings.sim_country_iso,
        settings.user_in_nanp
    );
    REGION
        .set(settings)
        .map_err(|_| SmartDialError::RegionAlreadyInitialized)
}

/// The process-wide region settings, or the default if none were installed.
pub fn current_region() -> &'static RegionSettings {
    REGION.get().unwrap_or(&DEFAULT_REGION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_table_is_sorted_and_unique() {
        assert!(COUNTRY_CODES.windows(2).all(|w| w[0] < w[1]));
        assert!(COUNTRY_CODES.len() > 200);
    }

    #[test]
    fn recognizes_calling_codes() {
        for code in ["1", "7", "44", "49", "86", "352", "998"] {
            assert!(is_valid_country_code(code), "{code}");
        }
        for code in ["", "0", "4", "99", "1234", "+1"] {
            assert!(!is_valid_country_code(code), "{code}");
        }
    }

    #[test]
    fn nanp_membership() {
        assert!(is_country_nanp(Some("us")));
        assert!(is_country_nanp(Some("JM")));
        assert!(!is_country_nanp(Some("GB")));
        assert!(!is_country_nanp(Some("")));
        assert!(!is_country_nanp(None));
        assert_eq!(NANP_COUNTRIES.len(), 24);
    }

    #[test]
    fn sim_country_wins_over_stored() {
        let region = RegionSettings::detect(Some("de"), Some("US"));
        assert_eq!(region.sim_country_iso.as_deref(), Some("DE"));
        assert!(!region.user_in_nanp);
    }

    #[test]
    fn nanp_can_be_forced() {
        let region = RegionSettings::for_country("GB").with_nanp(true);
        assert_eq!(region.sim_country_iso.as_deref(), Some("GB"));
        assert!(region.user_in_nanp);
        assert!(!RegionSettings::for_country("US").with_nanp(false).user_in_nanp);
    }

    #[test]
    fn nothing_known_means_not_nanp() {
        assert_eq!(RegionSettings::detect(None, None), RegionSettings::default());
        assert_eq!(RegionSettings::detect(Some("  "), None), RegionSettings::default());
    }
}
