//! API error types
//!
//! Case conversion itself never fails. Errors only come from parsing case
//! style names and from loading configuration.

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Case style name not recognised
    #[error("unknown case style '{0}'")]
    UnknownCase(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
