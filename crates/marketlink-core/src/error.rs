//! Error types for the core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or resolving core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Calendar components do not form a valid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A date string did not match the expected `YYYY-MM-DD` pattern.
    #[error("Unrecognized date '{input}': expected YYYY-MM-DD")]
    UnrecognizedDate {
        /// The raw input that failed to parse.
        input: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unrecognized date error.
    #[must_use]
    pub fn unrecognized_date(input: impl Into<String>) -> Self {
        Self::UnrecognizedDate {
            input: input.into(),
        }
    }
}
