//! Error types for prop and style extraction.

use std::fmt;

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;

/// An error raised while extracting from or rewriting component source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ExtractError {
    /// The error message.
    pub message: String,
    /// The error kind.
    pub kind: ExtractErrorKind,
}

impl ExtractError {
    /// Create a new extraction error.
    pub fn new(message: impl Into<String>, kind: ExtractErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Create an invalid pattern error.
    pub fn invalid_pattern(err: &regex::Error) -> Self {
        Self::new(
            format!("Invalid pattern: {}", err),
            ExtractErrorKind::InvalidPattern,
        )
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier(name: &str) -> Self {
        Self::new(
            format!("Not a valid prop name: {:?}", name),
            ExtractErrorKind::InvalidIdentifier,
        )
    }
}

/// Kind of extraction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractErrorKind {
    /// A scanning pattern failed to compile.
    InvalidPattern,
    /// A prop name given by the caller is not an identifier.
    InvalidIdentifier,
}

impl ExtractErrorKind {
    /// Get the error kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractErrorKind::InvalidPattern => "invalid-pattern",
            ExtractErrorKind::InvalidIdentifier => "invalid-identifier",
        }
    }
}

impl fmt::Display for ExtractErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
