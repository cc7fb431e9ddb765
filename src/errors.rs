//! Error types for loading reports and configuration.
//!
//! Format adaptation and conversion never fail; these errors only cover the
//! boundary around them: reading files, decoding JSON, and rejecting a
//! document whose top level is not an object.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// File could not be read or written
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value is not an object
    #[error("Expected a JSON object at the top level of the report, found {found}")]
    NotAnObject { found: &'static str },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration values are invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;
