//! Theme error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by theme storage and configuration
///
/// The theme store itself never returns these; it logs them and carries on.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Not one of `light`, `dark`, `system`
    #[error("Invalid theme mode '{0}' (expected light, dark or system)")]
    InvalidMode(String),

    /// Preference storage could not be read or written
    #[error("Preference storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preference file contents could not be encoded
    #[error("Failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),

    /// Configuration text is not valid TOML for this schema
    #[error("Invalid configuration: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Configuration could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    /// Configuration file could not be read or parsed
    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
