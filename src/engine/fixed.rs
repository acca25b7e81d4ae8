//! Decimal → binary / octal / hexadecimal using masks and shifts
//!
//! For non-negative input these produce exactly what [`to_base`] produces
//! for the matching base. Octal and hexadecimal render negatives as sign and
//! magnitude. Binary renders negatives as a two's-complement bit pattern,
//! see [`BinaryMode`].
//!
//! [`to_base`]: super::integer::to_base

use serde::Serialize;

use super::base::Base;
use super::integer::render_signed;
use super::numeral::Numeral;
use super::trace::{ConversionTrace, DigitStep, NoTrace, StepSink, Traced};

/// How [`dec_to_bin`] renders negative numbers.
///
/// Both modes compute the pattern `(1 << (bitlength(|n|) + 1)) + n`, i.e. the
/// shortest two's-complement width with room for a sign bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryMode {
    /// `-` followed by the two's-complement bits. Matches the output of
    /// earlier releases, even though the sign is then stated twice.
    #[default]
    SignedTwosComplement,
    /// The two's-complement bits alone.
    TwosComplement,
}

/// Convert to binary with `& 1` / `>> 1`.
pub fn dec_to_bin(n: i64, mode: BinaryMode) -> Numeral {
    binary_with(n, mode, &mut NoTrace)
}

pub fn dec_to_bin_traced(n: i64, mode: BinaryMode) -> Traced<Numeral> {
    let mut trace = ConversionTrace::new();
    let value = binary_with(n, mode, &mut trace);
    Traced { value, trace }
}

/// Convert to octal with `& 7` / `>> 3`.
pub fn dec_to_oct(n: i64) -> Numeral {
    signed_with(n, Base::OCTAL, &mut NoTrace)
}

pub fn dec_to_oct_traced(n: i64) -> Traced<Numeral> {
    let mut trace = ConversionTrace::new();
    let value = signed_with(n, Base::OCTAL, &mut trace);
    Traced { value, trace }
}

/// Convert to hexadecimal with `& 15` / `>> 4`.
pub fn dec_to_hex(n: i64) -> Numeral {
    signed_with(n, Base::HEXADECIMAL, &mut NoTrace)
}

pub fn dec_to_hex_traced(n: i64) -> Traced<Numeral> {
    let mut trace = ConversionTrace::new();
    let value = signed_with(n, Base::HEXADECIMAL, &mut trace);
    Traced { value, trace }
}

/// Two's-complement width and bit pattern for a negative `n`.
///
/// Computed in 128 bits so `i64::MIN` (which needs 65) is representable.
pub fn twos_complement(n: i64) -> (u32, u128) {
    let magnitude = u128::from(n.unsigned_abs());
    let bits = (u128::BITS - magnitude.leading_zeros()) + 1;
    (bits, (1u128 << bits) - magnitude)
}

fn binary_with<S: StepSink>(n: i64, mode: BinaryMode, sink: &mut S) -> Numeral {
    if n >= 0 {
        return signed_with(n, Base::BINARY, sink);
    }

    sink.note(|| format!("Converting negative number: {}", n));
    let (bits, pattern) = twos_complement(n);
    sink.note(|| {
        format!(
            "Determined {} bits needed for two's complement representation",
            bits
        )
    });
    sink.note(|| format!("Computed two's complement value: {}", pattern));
    sink.note(|| format!("Starting decimal to binary conversion of {}:", pattern));

    let digits = shift_out(pattern, Base::BINARY, sink);
    sink.note(|| format!("Reading remainders from bottom to top: {}", digits));

    let prefixed = mode == BinaryMode::SignedTwosComplement;
    let numeral = Numeral::from_parts(Base::BINARY, prefixed, digits, None);
    if prefixed {
        sink.note(|| format!("Adding negative sign: {}", numeral));
    }
    sink.conclude(
        || format!("Final result: {} in decimal = {} in binary", n, numeral),
        || numeral.to_string(),
    );
    numeral
}

fn signed_with<S: StepSink>(n: i64, base: Base, sink: &mut S) -> Numeral {
    render_signed(n, base, sink, shift_out)
}

/// Mask-and-shift counterpart of `divide_out` for power-of-two bases.
fn shift_out<S: StepSink>(magnitude: u128, base: Base, sink: &mut S) -> String {
    let shift = base.radix().trailing_zeros();
    let mask = u128::from(base.radix() - 1);
    sink.heading(|| format!("Step | Decimal | Divided by {} | Remainder | Digit", base));

    let mut digits = Vec::new();
    let mut working = magnitude;
    loop {
        let remainder = (working & mask) as u32;
        let digit = base.digit_char(remainder);
        sink.digit(DigitStep::Division {
            working,
            base: base.radix(),
            remainder,
            digit,
        });
        digits.push(digit);
        working >>= shift;
        if working == 0 {
            break;
        }
    }

    digits.iter().rev().collect()
}
