//! Error types returned by the release parser.
//!
//! The sub-parsers for language, quality, streaming provider and release
//! group never fail; only the title grammar, the number conversion and the
//! protocol front-ends produce errors.

use crate::model::Protocol;

/// Error raised while parsing a release title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No title pattern matched the input.
    #[error("Release is not parsable: {0}")]
    NotParsable(String),

    /// A pattern matched but the captured data is inconsistent.
    #[error("Invalid release: {0}")]
    InvalidRelease(String),

    /// A numeric token could not be converted.
    #[error("Format error: {0}")]
    Format(String),

    /// The release was refused by a protocol validator.
    #[error("Release rejected: {0}")]
    Rejected(String),

    /// The protocol has no parser.
    #[error("Unsupported protocol: {0}")]
    UnsupportedProtocol(Protocol),
}

impl ParseError {
    /// Create a new NotParsable error.
    pub fn not_parsable<S: Into<String>>(msg: S) -> Self {
        Self::NotParsable(msg.into())
    }

    /// Create a new InvalidRelease error.
    pub fn invalid_release<S: Into<String>>(msg: S) -> Self {
        Self::InvalidRelease(msg.into())
    }

    /// Create a new Format error.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Self::Format(msg.into())
    }

    /// Create a new Rejected error.
    pub fn rejected<S: Into<String>>(msg: S) -> Self {
        Self::Rejected(msg.into())
    }
}

/// Result type alias using [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;
