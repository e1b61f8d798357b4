//! Error types for the pillbox_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for pillbox_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Key-value store error
    #[error("Store error: {0}")]
    Store(String),

    /// Manual entry rejected (blank name or bad daily dose)
    #[error("Please enter a valid pill name and daily dose (must be 1 or more).")]
    InvalidEntry,

    /// No reference entry for the requested supplement
    #[error("Information not available for this supplement.")]
    InfoUnavailable(String),

    /// Unrecognised action name
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// True for errors that are notices meant for the user rather than faults
    pub fn is_user_notice(&self) -> bool {
        matches!(self, Error::InvalidEntry | Error::InfoUnavailable(_))
    }
}
