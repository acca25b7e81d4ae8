//! Validated digit strings in a declared base

use std::fmt;

use serde::{Serialize, Serializer};

use super::base::Base;
use super::error::{ConversionError, Result};

/// A digit sequence in a known base, optionally negative, optionally with a
/// fractional part.
///
/// Digits are stored in canonical uppercase form. Parsed numerals never
/// carry a fractional part; only the float converter produces one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral {
    base: Base,
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

impl Numeral {
    /// Parse and validate `input` as an integer numeral in `base`.
    ///
    /// Accepts at most one leading `-`. Letters are accepted in either case
    /// and normalised to uppercase.
    pub fn parse(input: &str, base: Base) -> Result<Self> {
        let (negative, body) = match input.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, input),
        };

        if body.is_empty() {
            return Err(ConversionError::invalid_numeral(
                input,
                base.radix(),
                "no digits",
            ));
        }

        let mut integer = String::with_capacity(body.len());
        for c in body.chars() {
            match base.digit_value(c) {
                Some(value) => integer.push(base.digit_char(value)),
                None if c == '-' => {
                    return Err(ConversionError::invalid_numeral(
                        input,
                        base.radix(),
                        "only one leading sign is allowed",
                    ))
                }
                None => {
                    return Err(ConversionError::invalid_numeral(
                        input,
                        base.radix(),
                        format!("'{}' is not a base-{} digit", c, base),
                    ))
                }
            }
        }

        Ok(Self {
            base,
            negative,
            integer,
            fraction: None,
        })
    }

    pub(crate) fn from_parts(
        base: Base,
        negative: bool,
        integer: String,
        fraction: Option<String>,
    ) -> Self {
        Self {
            base,
            negative,
            integer,
            fraction,
        }
    }

    pub fn base(&self) -> Base {
        self.base
    }

    /// Whether the rendered form starts with `-`.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer digits without sign.
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fractional digits, if this numeral came from the float converter.
    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Total number of digits, integer and fractional.
    pub fn digit_count(&self) -> usize {
        self.integer.len() + self.fraction.as_ref().map_or(0, String::len)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for Numeral {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Numeral {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Serialize for Numeral {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalises_case() {
        let numeral = Numeral::parse("-ff", Base::HEXADECIMAL).unwrap();
        assert!(numeral.is_negative());
        assert_eq!(numeral.integer_digits(), "FF");
        assert_eq!(numeral, "-FF");
    }

    #[test]
    fn parse_rejects_bad_input() {
        for bad in ["", "-", "--1", "12", "1-0", " 1"] {
            assert!(
                matches!(
                    Numeral::parse(bad, Base::BINARY),
                    Err(ConversionError::InvalidNumeral { .. })
                ),
                "'{}' should be rejected",
                bad
            );
        }
    }
}
