// crates/smartdial-core/src/config.rs
use crate::error::{Result, SmartDialError};
use serde::{Deserialize, Serialize};

/// Tuning knobs for name and number matching.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Allow "JS" to find "John Smith" through initials.
    pub allow_initial_match: bool,
    /// How many leading characters of a token may stand in as its initial.
    pub initial_length_limit: usize,
    /// Leading tokens of a name whose initials may be used.
    pub first_tokens_for_initials: usize,
    /// Trailing tokens of a name whose initials may be used.
    pub last_tokens_for_initials: usize,
    /// Number matching only: report an empty query or empty number as a
    /// zero-length match instead of no match. An empty query never matches
    /// a name.
    pub match_empty_query: bool,
}

pub const DEFAULT_MATCHER_CONFIG: MatcherConfig = MatcherConfig {
    allow_initial_match: true,
    initial_length_limit: 1,
    first_tokens_for_initials: 2,
    last_tokens_for_initials: 2,
    match_empty_query: false,
};

impl Default for MatcherConfig {
    fn default() -> Self {
        DEFAULT_MATCHER_CONFIG
    }
}

impl MatcherConfig {
    /// Rejects combinations that would silently disable a feature the
    /// config asks for.
    pub fn validate(&self) -> Result<()> {
        if self.allow_initial_match && self.initial_length_limit == 0 {
            return Err(SmartDialError::InvalidConfig(
                "initial_length_limit must be at least 1 when initials are allowed".into(),
            ));
        }
        if self.allow_initial_match
            && self.first_tokens_for_initials == 0
            && self.last_tokens_for_initials == 0
        {
            return Err(SmartDialError::InvalidConfig(
                "no token is eligible for initials; set allow_initial_match to false instead"
                    .into(),
            ));
        }
        Ok(())
    }

    /// True if token `index` of a name with `token_count` tokens lies in the
    /// leading or trailing initials window.
    pub fn token_allows_initial(&self, index: usize, token_count: usize) -> bool {
        index < self.first_tokens_for_initials
            || index + self.last_tokens_for_initials >= token_count
    }

    /// Parses and validates a JSON config.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("loaded matcher config: {config:?}");
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    #[cfg(feature = "json")]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                SmartDialError::NotFound(format!("Config not found at {}: {}", path.display(), e))
            }
            _ => SmartDialError::Io(e),
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = MatcherConfig::default();
        assert!(config.allow_initial_match);
        assert_eq!(config.initial_length_limit, 1);
        assert_eq!(config.first_tokens_for_initials, 2);
        assert_eq!(config.last_tokens_for_initials, 2);
        assert!(!config.match_empty_query);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn initials_window() {
        let config = MatcherConfig::default();
        let eligible: Vec<bool> = (0..6).map(|i| config.token_allows_initial(i, 6)).collect();
        assert_eq!(eligible, vec![true, true, false, false, true, true]);
        assert!((0..3).all(|i| config.token_allows_initial(i, 3)));
    }

    #[test]
    fn rejects_zero_initial_length() {
        let config = MatcherConfig {
            initial_length_limit: 0,
            ..DEFAULT_MATCHER_CONFIG
        };
        assert!(matches!(
            config.validate(),
            Err(SmartDialError::InvalidConfig(_))
        ));

        let disabled = MatcherConfig {
            allow_initial_match: false,
            ..config
        };
        assert!(disabled.validate().is_ok());
    }

    #[cfg(feature = "json")]
    #[test]
    fn partial_json_keeps_defaults() {
        let config = MatcherConfig::from_json_str(r#"{ "allow_initial_match": false }"#).unwrap();
        assert!(!config.allow_initial_match);
        assert_eq!(config.first_tokens_for_initials, 2);
    }

    #[cfg(feature = "json")]
    #[test]
    fn unreadable_config_paths() {
        let missing = std::env::temp_dir().join("smartdial-no-such-config.json");
        assert!(matches!(
            MatcherConfig::load_from_path(&missing),
            Err(SmartDialError::NotFound(_))
        ));
        // A directory exists but cannot be read as text.
        assert!(matches!(
            MatcherConfig::load_from_path(std::env::temp_dir()),
            Err(SmartDialError::Io(_))
        ));
    }

    #[cfg(feature = "json")]
    #[test]
    fn bad_json_is_an_error() {
        assert!(matches!(
            MatcherConfig::from_json_str("{ nope"),
            Err(SmartDialError::Json(_))
        ));
        assert!(MatcherConfig::from_json_str(r#"{ "initial_length_limit": 0 }"#).is_err());
    }
}
