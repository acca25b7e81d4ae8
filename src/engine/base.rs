//! Radix value type and the shared digit alphabet

use std::fmt;

use serde::Serialize;

use super::error::{ConversionError, Result};

/// Canonical digit alphabet, uppercase for values 10..=15
pub const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Smallest supported radix
pub const MIN_BASE: u32 = 2;

/// Largest supported radix
pub const MAX_BASE: u32 = 16;

/// A validated radix in `[2, 16]`.
///
/// The only way to obtain a `Base` is through [`Base::new`] (or the named
/// constants), so every operation that takes one can rely on the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Base(u32);

impl Base {
    pub const BINARY: Base = Base(2);
    pub const OCTAL: Base = Base(8);
    pub const DECIMAL: Base = Base(10);
    pub const HEXADECIMAL: Base = Base(16);

    /// Validate a radix. Values outside `[2, 16]` are rejected, never clamped.
    pub fn new(radix: i64) -> Result<Self> {
        if (MIN_BASE as i64..=MAX_BASE as i64).contains(&radix) {
            Ok(Base(radix as u32))
        } else {
            Err(ConversionError::InvalidBase { base: radix })
        }
    }

    /// The numeric radix.
    pub fn radix(self) -> u32 {
        self.0
    }

    /// Character for a digit value. Caller guarantees `value < radix`.
    pub fn digit_char(self, value: u32) -> char {
        debug_assert!(value < self.0);
        DIGITS[value as usize] as char
    }

    /// Value of a digit character in this base, case-insensitive for letters.
    pub fn digit_value(self, c: char) -> Option<u32> {
        c.to_digit(16).filter(|&v| v < self.0)
    }

    /// Human-readable name used in step narration.
    pub fn name(self) -> String {
        match self.0 {
            2 => "binary".to_string(),
            8 => "octal".to_string(),
            10 => "decimal".to_string(),
            16 => "hexadecimal".to_string(),
            other => format!("base {}", other),
        }
    }
}

impl TryFrom<i64> for Base {
    type Error = ConversionError;

    fn try_from(radix: i64) -> Result<Self> {
        Base::new(radix)
    }
}

impl TryFrom<u32> for Base {
    type Error = ConversionError;

    fn try_from(radix: u32) -> Result<Self> {
        Base::new(i64::from(radix))
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> u32 {
        base.0
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
