// crates/smartdial-core/src/error.rs

use thiserror::Error;

/// Errors raised outside the matching path.
///
/// Matching itself never fails: "no match" is an ordinary return value.
/// These variants only come from configuration, region setup and loading
/// contact lists from disk.
#[derive(Debug, Error)]
pub enum SmartDialError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("region settings already initialized")]
    RegionAlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, SmartDialError>;
