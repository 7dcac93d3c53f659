//! Error types for mytool
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for mytool
#[derive(Error, Debug)]
pub enum MytoolError {
    /// A token that could not be coerced to a number
    #[error("Invalid number: '{token}'")]
    InvalidNumber {
        token: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

impl MytoolError {
    /// Create a new invalid-number error
    pub fn invalid_number(
        token: impl Into<String>,
        source: std::num::ParseFloatError,
    ) -> Self {
        Self::InvalidNumber {
            token: token.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MytoolError>;
