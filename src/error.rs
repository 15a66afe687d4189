//! Error types for Solidafy Streamloader
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for Solidafy Streamloader
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Record Codec Errors
    // ============================================================================
    #[error("invalid JSON at line {line}: {message}")]
    MalformedJson { line: usize, message: String },

    #[error("failed to decode base64 data: {message}")]
    InvalidBase64 { message: String },

    #[error("failed to decompress gzip data (gzip reader): {message}")]
    InvalidGzip { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Document Loading Errors
    // ============================================================================
    #[error("Failed to decode document: {message}")]
    Decode { message: String },

    #[error("CSV parsing error: {message}")]
    CsvParse { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a malformed JSON error for a 1-based line number
    pub fn malformed_json(line: usize, message: impl std::fmt::Display) -> Self {
        Self::MalformedJson {
            line,
            message: message.to_string(),
        }
    }

    /// Create an invalid base64 error
    pub fn invalid_base64(message: impl std::fmt::Display) -> Self {
        Self::InvalidBase64 {
            message: message.to_string(),
        }
    }

    /// Create an invalid gzip error
    pub fn invalid_gzip(message: impl std::fmt::Display) -> Self {
        Self::InvalidGzip {
            message: message.to_string(),
        }
    }

    /// Create a document decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create a CSV parse error
    pub fn csv(message: impl Into<String>) -> Self {
        Self::CsvParse {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::FileNotFound {
            path: path.as_ref().display().to_string(),
        }
    }

    /// Tag the error with the index of the batch that produced it.
    ///
    /// The variant is kept so callers can still tell base64, gzip and JSON
    /// failures apart.
    #[must_use]
    pub fn in_batch(self, index: usize) -> Self {
        self.at(format!("batch {index}"))
    }

    /// Prefix the message of payload and config errors with a location
    #[must_use]
    pub fn at(self, location: impl std::fmt::Display) -> Self {
        let prefix = |message: String| format!("{location}: {message}");
        match self {
            Self::MalformedJson { line, message } => Self::MalformedJson {
                line,
                message: prefix(message),
            },
            Self::InvalidBase64 { message } => Self::InvalidBase64 {
                message: prefix(message),
            },
            Self::InvalidGzip { message } => Self::InvalidGzip {
                message: prefix(message),
            },
            Self::Config { message } => Self::Config {
                message: prefix(message),
            },
            other => other,
        }
    }
}

/// Result type alias for Solidafy Streamloader
pub type Result<T> = std::result::Result<T, Error>;
