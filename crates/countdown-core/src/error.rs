//! Core error types for countdown-core.
//!
//! The countdown engine itself never fails. Errors only arise at the edges:
//! parsing the configured target, resolving a timezone or locale, and
//! reading or writing the configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for countdown-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name a configuration field
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Could not determine where configuration lives
    #[error("Could not resolve configuration directory: {0}")]
    NoDataDir(String),
}

/// Validation errors for user-supplied input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Timestamp is not RFC 3339
    #[error("Invalid timestamp '{input}': expected RFC 3339, e.g. 2025-11-14T08:00:00-03:00")]
    InvalidTimestamp { input: String },

    /// Timestamp has no UTC offset
    #[error("Timestamp '{input}' has no UTC offset; floating local times are ambiguous")]
    MissingOffset { input: String },

    /// Timezone name is not in the IANA database
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    /// Locale has no display rules
    #[error("Unsupported locale '{0}' (supported: pt-BR, en-US)")]
    UnsupportedLocale(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
