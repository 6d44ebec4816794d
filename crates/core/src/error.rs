//! Error types for temporal codecs
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every failure is detected synchronously at decode or construction time and
//! propagated to the caller. Codecs are pure and deterministic, so nothing is
//! retried and nothing is swallowed: malformed or out-of-range input always
//! surfaces a typed error rather than a best-effort partial value.

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for encode/decode and value construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Text does not match the expected grammar on decode
    #[error("malformed text {text:?}: {reason}")]
    Format {
        /// The input that failed to parse
        text: String,
        /// What the grammar expected at the point of failure
        reason: &'static str,
    },

    /// Decoded or constructed value falls outside supported bounds
    #[error("value out of range: {0}")]
    Range(String),

    /// Zone identifier not found in the zone database
    #[error("unknown time zone identifier: {0:?}")]
    UnknownZone(String),
}

impl Error {
    /// Build a `Format` error for the given input text
    pub fn format(text: impl Into<String>, reason: &'static str) -> Self {
        Error::Format {
            text: text.into(),
            reason,
        }
    }

    /// Build a `Range` error with the given description
    pub fn range(message: impl Into<String>) -> Self {
        Error::Range(message.into())
    }
}
