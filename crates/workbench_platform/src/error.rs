//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Platform surface not available (headless, window already closed)
    #[error("Platform not available: {0}")]
    Unavailable(String),

    /// Operation not supported on this OS
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Native window theme could not be applied
    #[error("Window theme operation failed: {0}")]
    WindowTheme(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
