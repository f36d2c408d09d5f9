//! Error types for product construction.

use thiserror::Error;

use crate::product::ProductType;

/// A specialized Result type for product operations.
pub type ProductResult<T> = Result<T, ProductError>;

/// Errors that can occur while building or reading products.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// A future was given an underlying of the wrong kind.
    #[error("Incompatible underlying: expected {expected} product, got {actual}")]
    IncompatibleUnderlying {
        /// Kind the future type requires.
        expected: ProductType,
        /// Kind that was supplied.
        actual: ProductType,
    },

    /// A price quote could not be interpreted.
    #[error("Invalid price quote '{quote}': {reason}")]
    InvalidPriceQuote {
        /// The quote as supplied.
        quote: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] refdata_core::CoreError),
}

impl ProductError {
    /// Creates an incompatible underlying error.
    #[must_use]
    pub fn incompatible_underlying(expected: ProductType, actual: ProductType) -> Self {
        Self::IncompatibleUnderlying { expected, actual }
    }

    /// Creates an invalid price quote error.
    #[must_use]
    pub fn invalid_price_quote(quote: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPriceQuote {
            quote: quote.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from security identifier validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Identifier has the wrong number of characters.
    #[error("{id_type} must be {expected} characters, got {actual}")]
    InvalidLength {
        /// Identifier type name.
        id_type: &'static str,
        /// Required length.
        expected: usize,
        /// Supplied length.
        actual: usize,
    },

    /// Identifier contains a character outside its alphabet.
    #[error("{id_type} contains invalid character '{ch}' at position {position}")]
    InvalidCharacter {
        /// Identifier type name.
        id_type: &'static str,
        /// Offending character.
        ch: char,
        /// Zero-based position.
        position: usize,
    },

    /// Identifier is well formed but its check digit does not match.
    #[error("{id_type} '{value}' has an invalid check digit")]
    InvalidCheckDigit {
        /// Identifier type name.
        id_type: &'static str,
        /// Full identifier.
        value: String,
    },

    /// Identifier is structurally invalid.
    #[error("Invalid {id_type}: {reason}")]
    InvalidFormat {
        /// Identifier type name.
        id_type: &'static str,
        /// Description of the problem.
        reason: String,
    },
}
