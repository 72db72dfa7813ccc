//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An encoding or decoding error occurred.
    #[error("encoding error: {0}")]
    Encoding(String),
}

impl CoreError {
    /// Creates the error reported when input ends before a value is complete.
    #[must_use]
    pub fn truncated(what: &str) -> Self {
        Self::Encoding(format!("unexpected end of input while reading {what}"))
    }
}
