// tokscan/src/error.rs

//! Error types for token scanning.

use std::io;
use thiserror::Error;

/// Result type alias for tokscan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that terminate a scan before every destination was filled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The stream ran out before a token was found for a destination
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// A token could not be converted into its destination's type
    #[error("cannot convert '{token}' to {target}: {reason}")]
    Conversion {
        token: String,
        target: String,
        reason: String,
    },

    /// Line mode hit a newline before every destination was filled
    #[error("unexpected newline")]
    UnexpectedNewline,

    /// Line mode filled every destination but the line carries more input
    #[error("expected newline, found '{found}'")]
    ExpectedNewline { found: char },

    /// A token exceeded the configured length limit
    #[error("token exceeds the maximum length of {limit} bytes")]
    TokenTooLong { limit: usize },

    /// A token was not valid UTF-8
    #[error("invalid UTF-8 in token at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// The underlying reader failed
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<io::Error> for ScanError {
    fn from(err: io::Error) -> Self {
        ScanError::Io(err.to_string())
    }
}

impl ScanError {
    /// Create a new conversion error.
    pub fn conversion<S: Into<String>>(token: S, target: S, reason: S) -> Self {
        ScanError::Conversion {
            token: token.into(),
            target: target.into(),
            reason: reason.into(),
        }
    }

    /// Short machine-readable name of the error kind.
    pub fn category(&self) -> &'static str {
        match self {
            ScanError::UnexpectedEof => "eof",
            ScanError::Conversion { .. } => "conversion",
            ScanError::UnexpectedNewline => "unexpected_newline",
            ScanError::ExpectedNewline { .. } => "expected_newline",
            ScanError::TokenTooLong { .. } => "token_too_long",
            ScanError::InvalidUtf8 { .. } => "invalid_utf8",
            ScanError::Io(_) => "io",
        }
    }

    /// Whether the scan stopped because the input was exhausted.
    pub fn is_eof(&self) -> bool {
        matches!(self, ScanError::UnexpectedEof)
    }
}
