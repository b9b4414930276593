//! Error types for authority configuration loading.

use thiserror::Error;

/// Result type alias for configuration loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for authority configuration.
///
/// Only the loading layer produces these. Accessors over an already-loaded
/// configuration never fail; wrong-shaped fields read as absent instead.
#[derive(Error, Debug)]
pub enum Error {
    // Document errors (10-19)
    #[error("configuration document root must be a mapping, found {found}")]
    NotAMapping { found: String },

    #[error("unsupported configuration version: {version} (supported: {supported})")]
    UnsupportedVersion { version: String, supported: String },

    #[error("unrecognized configuration file extension: {0}")]
    UnknownFormat(String),

    // Settings errors (20-29)
    #[error("global settings already installed")]
    SettingsAlreadyInstalled,

    #[error("invalid language setting: {0}")]
    InvalidLanguage(String),

    // I/O and parse errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Returns the error code for this error type.
    /// Used for detailed error reporting by callers that surface codes.
    pub fn code(&self) -> u32 {
        match self {
            Error::NotAMapping { .. } => 10,
            Error::UnsupportedVersion { .. } => 11,
            Error::UnknownFormat(_) => 12,
            Error::SettingsAlreadyInstalled => 20,
            Error::InvalidLanguage(_) => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::Yaml(_) => 62,
        }
    }
}
