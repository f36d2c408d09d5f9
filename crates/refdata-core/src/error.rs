//! Error types for core reference data types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A textual code did not match any known value.
    #[error("Unknown {kind} code: '{code}'")]
    UnknownCode {
        /// What was being parsed (e.g. "currency").
        kind: &'static str,
        /// The code that failed to parse.
        code: String,
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

    /// Creates an unknown code error.
    #[must_use]
    pub fn unknown_code(kind: &'static str, code: impl Into<String>) -> Self {
        Self::UnknownCode {
            kind,
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_date("2024-02-30");
        assert_eq!(err.to_string(), "Invalid date: 2024-02-30");
    }

    #[test]
    fn test_unknown_code_display() {
        let err = CoreError::unknown_code("currency", "XYZ");
        assert_eq!(err.to_string(), "Unknown currency code: 'XYZ'");
    }
}
