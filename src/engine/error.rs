//! Error types for the conversion engine.
//!
//! Every engine operation either returns a complete value or one of these
//! errors. Each variant carries the offending input and the constraint it
//! broke so the caller can render a message without re-deriving context.

use thiserror::Error;

/// Errors that can occur during a conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// Base outside the supported range.
    #[error("base must be between 2 and 16, got {base}")]
    InvalidBase {
        /// Requested radix
        base: i64,
    },

    /// Numeral string is not a valid digit sequence for its base.
    #[error("invalid number '{input}' for base {base}: {reason}")]
    InvalidNumeral {
        /// Numeral as supplied by the caller
        input: String,
        /// Declared base of the numeral
        base: u32,
        /// What was wrong with it
        reason: String,
    },

    /// Numeral is well formed but its value does not fit a signed 64-bit integer.
    #[error("number '{input}' in base {base} does not fit in a signed 64-bit integer")]
    Overflow {
        /// Numeral as supplied by the caller
        input: String,
        /// Declared base of the numeral
        base: u32,
    },

    /// Character input was not exactly one character.
    #[error("expected a single character, got {count} in '{input}'")]
    InvalidCharacterInput {
        /// Input as supplied by the caller
        input: String,
        /// Number of code points found
        count: usize,
    },

    /// Code point outside the Unicode range.
    #[error("code point must be between 0 and 1114111, got {code_point}")]
    CodePointOutOfRange {
        /// Requested code point
        code_point: i64,
    },

    /// Code point inside the Unicode range that cannot form a character.
    ///
    /// Surrogate values (U+D800..=U+DFFF) are always rejected.
    #[error("invalid code point: {code_point} (U+{code_point:04X}) is a surrogate")]
    InvalidCodePoint {
        /// Requested code point
        code_point: u32,
    },

    /// Fractional precision of zero.
    #[error("precision must be at least 1, got {precision}")]
    InvalidPrecision {
        /// Requested number of fractional digits
        precision: usize,
    },

    /// Float input is NaN, infinite, or has an integer part beyond 128 bits.
    #[error("cannot convert non-finite or oversized value {value}")]
    NonFiniteValue {
        /// Value as supplied by the caller
        value: f64,
    },
}

impl ConversionError {
    pub(crate) fn invalid_numeral(input: &str, base: u32, reason: impl Into<String>) -> Self {
        ConversionError::InvalidNumeral {
            input: input.to_string(),
            base,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, ConversionError>;
