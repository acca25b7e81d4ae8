//! Decimal floating-point → arbitrary base with truncated fractional digits
//!
//! There is no inverse: numerals with a fractional part are
//! produced here but never parsed.

use super::base::Base;
use super::error::{ConversionError, Result};
use super::integer::divide_out;
use super::numeral::Numeral;
use super::trace::{DigitStep, NoTrace, StepSink, Traced};

/// Fractional digits produced when the caller does not ask for a count.
pub const DEFAULT_PRECISION: usize = 10;

/// Integer parts at or above 2^128 cannot be expanded.
const INTEGER_PART_LIMIT: f64 = 340_282_366_920_938_463_463_374_607_431_768_211_456.0;

/// Convert `x` to `base` with at most `precision` fractional digits.
///
/// Fractional digits come from repeated multiplication by the base; the
/// expansion stops early once the remaining fraction is exactly zero. Zero
/// converts to `"0.0"` and whole numbers keep a single `0` fractional digit.
///
/// # Errors
/// * `InvalidPrecision` if `precision` is 0
/// * `NonFiniteValue` if `x` is NaN, infinite, or has an integer part of
///   128 bits or more
pub fn to_base_float(x: f64, base: Base, precision: usize) -> Result<Numeral> {
    to_base_float_with(x, base, precision, &mut NoTrace)
}

/// [`to_base_float`] with a narrated trace of every division and
/// multiplication.
pub fn to_base_float_traced(x: f64, base: Base, precision: usize) -> Result<Traced<Numeral>> {
    Traced::capture(|trace| to_base_float_with(x, base, precision, trace))
}

fn to_base_float_with<S: StepSink>(
    x: f64,
    base: Base,
    precision: usize,
    sink: &mut S,
) -> Result<Numeral> {
    if precision == 0 {
        return Err(ConversionError::InvalidPrecision { precision });
    }
    let magnitude = x.abs();
    if !magnitude.is_finite() || magnitude.trunc() >= INTEGER_PART_LIMIT {
        return Err(ConversionError::NonFiniteValue { value: x });
    }

    let negative = x < 0.0;
    if negative {
        sink.note(|| format!("Converting negative number: {}", x));
        sink.note(|| format!("Taking absolute value: {}", magnitude));
    }

    let integer_part = magnitude.trunc();
    let mut fraction = magnitude - integer_part;

    let integer_digits = divide_out(integer_part as u128, base, sink);
    sink.note(|| format!("Converting integer part {}: {}", integer_part, integer_digits));
    sink.note(|| format!("Converting fractional part {}:", fraction));
    sink.heading(|| {
        "Step | Fractional | Multiplied by Base | Result | Integer Part".to_string()
    });

    let radix = f64::from(base.radix());
    let mut fraction_digits = String::new();
    for _ in 0..precision {
        let product = fraction * radix;
        // Rounding can push the product up to exactly `radix`.
        let value = (product.trunc() as u32).min(base.radix() - 1);
        let digit = base.digit_char(value);
        sink.digit(DigitStep::Fraction {
            fraction,
            base: base.radix(),
            product,
            digit,
        });
        fraction_digits.push(digit);
        fraction = product - f64::from(value);
        if fraction == 0.0 {
            break;
        }
    }

    // precision >= 1, so at least one fractional digit always exists
    let numeral = Numeral::from_parts(base, negative, integer_digits, Some(fraction_digits));
    sink.note(|| format!("Combining results: {}", numeral));
    sink.conclude(
        || {
            format!(
                "Final result: {} in decimal = {} in {}",
                x,
                numeral,
                base.name()
            )
        },
        || numeral.to_string(),
    );
    Ok(numeral)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_is_two_to_the_128() {
        assert_eq!(INTEGER_PART_LIMIT, 2f64.powi(128));
    }

    #[test]
    fn rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e39] {
            assert!(matches!(
                to_base_float(bad, Base::BINARY, 4),
                Err(ConversionError::NonFiniteValue { .. })
            ));
        }
    }
}
