//! Domain error types
//!
//! This module defines the error hierarchy for Hearscreen. Every failure the
//! service can report maps onto an [`ErrorKind`], which is what clients see.
//! Database driver errors never leak past the adapter layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main Hearscreen error type
///
/// This is the primary error type used throughout the application.
#[derive(Debug, Error)]
pub enum HearscreenError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(String),

    /// A screening collides with an existing one (same HN and exam date)
    #[error("Duplicate screening result: {0}")]
    Duplicate(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Login with unknown username or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed or expired bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated caller lacks the required role
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Client-facing error classification
///
/// Serialized in SCREAMING_SNAKE_CASE, e.g. `DUPLICATE_RESULT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Missing or malformed input
    ValidationFailed,
    /// No record for the given identifier
    NotFound,
    /// Screening already recorded for this HN and exam date
    DuplicateResult,
    /// Login rejected
    InvalidCredentials,
    /// No usable token
    Unauthorized,
    /// Token valid but role insufficient
    Forbidden,
    /// Anything else; details stay in the server log
    Internal,
}

impl ErrorKind {
    /// Returns the wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailed => "VALIDATION_FAILED",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::DuplicateResult => "DUPLICATE_RESULT",
            ErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::Internal => "INTERNAL",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HearscreenError {
    /// Classifies the error for clients
    pub fn kind(&self) -> ErrorKind {
        match self {
            HearscreenError::Validation(_) => ErrorKind::ValidationFailed,
            HearscreenError::NotFound(_) => ErrorKind::NotFound,
            HearscreenError::Duplicate(_) => ErrorKind::DuplicateResult,
            HearscreenError::InvalidCredentials => ErrorKind::InvalidCredentials,
            HearscreenError::Unauthorized(_) => ErrorKind::Unauthorized,
            HearscreenError::Forbidden(_) => ErrorKind::Forbidden,
            HearscreenError::Configuration(_)
            | HearscreenError::Database(_)
            | HearscreenError::Serialization(_)
            | HearscreenError::Io(_)
            | HearscreenError::Other(_) => ErrorKind::Internal,
        }
    }

    /// Whether the message is safe to show to a client
    ///
    /// Internal errors may carry SQL or file-system details.
    pub fn is_client_safe(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for HearscreenError {
    fn from(err: std::io::Error) -> Self {
        HearscreenError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for HearscreenError {
    fn from(err: serde_json::Error) -> Self {
        HearscreenError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for HearscreenError {
    fn from(err: toml::de::Error) -> Self {
        HearscreenError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<csv::Error> for HearscreenError {
    fn from(err: csv::Error) -> Self {
        HearscreenError::Serialization(format!("CSV error: {err}"))
    }
}
