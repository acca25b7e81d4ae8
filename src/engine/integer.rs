//! Decimal integer ⇄ arbitrary base (2–16) by repeated division and
//! positional accumulation

use super::base::Base;
use super::error::{ConversionError, Result};
use super::numeral::Numeral;
use super::trace::{ConversionTrace, DigitStep, NoTrace, StepSink, Traced};

/// Convert a signed integer to its numeral in `base`.
///
/// Zero is `"0"` in every base. Negative values are rendered as `-`
/// followed by the digits of the magnitude.
pub fn to_base(n: i64, base: Base) -> Numeral {
    to_base_with(n, base, &mut NoTrace)
}

/// [`to_base`] with a narrated trace of every division.
pub fn to_base_traced(n: i64, base: Base) -> Traced<Numeral> {
    let mut trace = ConversionTrace::new();
    let value = to_base_with(n, base, &mut trace);
    Traced { value, trace }
}

/// Parse `input` as a numeral in `base` and return its value.
///
/// # Errors
/// * `InvalidNumeral` if a character is not a digit of `base`, the body is
///   empty, or the sign is misplaced
/// * `Overflow` if the value does not fit in an `i64`
pub fn from_base(input: &str, base: Base) -> Result<i64> {
    from_base_with(input, base, &mut NoTrace)
}

/// [`from_base`] with a narrated trace of every accumulated digit.
pub fn from_base_traced(input: &str, base: Base) -> Result<Traced<i64>> {
    Traced::capture(|trace| from_base_with(input, base, trace))
}

pub(crate) fn to_base_with<S: StepSink>(n: i64, base: Base, sink: &mut S) -> Numeral {
    render_signed(n, base, sink, divide_out)
}

/// Sign-and-magnitude rendering shared by the generic and shift-based paths.
/// `emit` produces the magnitude's digits and their division records.
pub(crate) fn render_signed<S: StepSink>(
    n: i64,
    base: Base,
    sink: &mut S,
    emit: fn(u128, Base, &mut S) -> String,
) -> Numeral {
    let negative = n < 0;
    let magnitude = n.unsigned_abs();

    if negative {
        sink.note(|| format!("Converting negative number: {}", n));
        sink.note(|| format!("Taking absolute value: {}", magnitude));
    }
    sink.note(|| {
        format!(
            "Starting decimal to {} conversion of {}:",
            base.name(),
            magnitude
        )
    });

    let digits = emit(u128::from(magnitude), base, sink);
    sink.note(|| format!("Reading remainders from bottom to top: {}", digits));

    let numeral = Numeral::from_parts(base, negative, digits, None);
    if negative {
        sink.note(|| format!("Adding negative sign: {}", numeral));
    }
    sink.conclude(
        || {
            format!(
                "Final result: {} in decimal = {} in {}",
                n,
                numeral,
                base.name()
            )
        },
        || numeral.to_string(),
    );
    numeral
}

/// Emit the digits of `magnitude` by repeated `mod`/`div`, most significant
/// first. One division record per digit; zero yields the single digit `0`.
pub(crate) fn divide_out<S: StepSink>(magnitude: u128, base: Base, sink: &mut S) -> String {
    let radix = u128::from(base.radix());
    sink.heading(|| format!("Step | Decimal | Divided by {} | Remainder | Digit", base));

    let mut digits = Vec::new();
    let mut working = magnitude;
    loop {
        let remainder = (working % radix) as u32;
        let digit = base.digit_char(remainder);
        sink.digit(DigitStep::Division {
            working,
            base: base.radix(),
            remainder,
            digit,
        });
        digits.push(digit);
        working /= radix;
        if working == 0 {
            break;
        }
    }

    digits.iter().rev().collect()
}

pub(crate) fn from_base_with<S: StepSink>(input: &str, base: Base, sink: &mut S) -> Result<i64> {
    let numeral = Numeral::parse(input, base)?;
    let radix = u64::from(base.radix());

    if numeral.is_negative() {
        sink.note(|| format!("Converting negative number: {}", input));
        sink.note(|| {
            format!(
                "Removing negative sign for conversion: {}",
                numeral.integer_digits()
            )
        });
    }
    sink.note(|| {
        format!(
            "Starting {} to decimal conversion of {}:",
            base.name(),
            numeral.integer_digits()
        )
    });
    sink.heading(|| {
        format!(
            "Position | Digit | Digit Value | Running Total = Previous × {} + Digit Value",
            base
        )
    });

    let overflow = || ConversionError::Overflow {
        input: input.to_string(),
        base: base.radix(),
    };

    let mut total: u64 = 0;
    for (position, digit) in numeral.integer_digits().chars().enumerate() {
        let digit_value = base
            .digit_value(digit)
            .ok_or_else(|| ConversionError::invalid_numeral(input, base.radix(), "bad digit"))?;
        total = total
            .checked_mul(radix)
            .and_then(|t| t.checked_add(u64::from(digit_value)))
            .ok_or_else(overflow)?;
        sink.digit(DigitStep::Accumulate {
            position,
            digit,
            digit_value,
            total,
        });
    }

    let signed = if numeral.is_negative() {
        -i128::from(total)
    } else {
        i128::from(total)
    };
    let value = i64::try_from(signed).map_err(|_| overflow())?;

    if numeral.is_negative() {
        sink.note(|| format!("Applying negative sign: {}", value));
    }
    sink.conclude(
        || {
            format!(
                "Final result: {} in {} = {} in decimal",
                input,
                base.name(),
                value
            )
        },
        || value.to_string(),
    );
    Ok(value)
}
