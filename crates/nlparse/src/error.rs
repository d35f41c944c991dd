//! Error types for nlparse operations.
//!
//! Parser selection has a single failure mode of its own: the requested
//! language identifier has no registered constructor. The remaining variants
//! come from loading parser requests from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for nlparse operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for nlparse operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No parser is registered for the requested language identifier.
    ///
    /// Identifiers are matched exactly, so `"EN"` is unsupported even though
    /// `"en"` is registered.
    #[error("unsupported language: {language:?} (available: {})", .available.join(", "))]
    UnsupportedLanguage {
        /// The identifier that was requested
        language: String,
        /// Identifiers registered at the time of the request, sorted
        available: Vec<String>,
    },

    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A parser request could not be decoded
    #[error("configuration error in {}: {message}", .path.display())]
    Config {
        /// Source of the request (`<inline>` for in-memory YAML)
        path: PathBuf,
        /// Decoder message
        message: String,
    },
}

impl Error {
    /// Create an unsupported language error.
    #[must_use]
    pub fn unsupported_language<I, S>(language: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnsupportedLanguage {
            language: language.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// The offending identifier, if this is an unsupported language error.
    #[must_use]
    pub fn unsupported_identifier(&self) -> Option<&str> {
        match self {
            Self::UnsupportedLanguage { language, .. } => Some(language),
            Self::Io(_) | Self::Config { .. } => None,
        }
    }
}
