//! Configuration error module.
//!
//! Errors raised while loading, parsing or validating configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file is missing.
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    /// The configuration file could not be parsed or deserialized.
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    /// A section failed validation.
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// A value is outside its valid range.
    #[error("Configuration value {key} is out of valid range: {message}")]
    ValueOutOfRange {
        /// The key of the invalid value
        key: String,
        /// Description of the valid range
        message: String,
    },
}
