//! Error types for the etag crate.

use thiserror::Error;

/// Result type alias for etag operations.
pub type Result<T> = std::result::Result<T, EtagError>;

/// Errors that can occur while reading entity tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EtagError {
    /// Tag does not have the `<size>-<segment>` layout
    #[error("Malformed entity tag: {0}")]
    MalformedTag(String),

    /// Short second segment is not a representable millisecond timestamp
    #[error("Invalid timestamp segment: {0}")]
    InvalidTimestamp(String),
}

/// Error code for integration with shared error reporting.
/// Range: 11xxx for etag errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtagErrorCode {
    /// Malformed entity tag
    MalformedTag = 11001,
    /// Invalid timestamp segment
    InvalidTimestamp = 11002,
}

impl EtagError {
    /// Returns the error code for this error.
    pub fn code(&self) -> EtagErrorCode {
        match self {
            EtagError::MalformedTag(_) => EtagErrorCode::MalformedTag,
            EtagError::InvalidTimestamp(_) => EtagErrorCode::InvalidTimestamp,
        }
    }
}
