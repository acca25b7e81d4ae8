//! Character ⇄ Unicode code point
//!
//! Surrogate code points (U+D800..=U+DFFF) are rejected: a lone surrogate
//! is not a character.

use super::error::{ConversionError, Result};
use super::fixed::{dec_to_bin, dec_to_hex, BinaryMode};
use super::trace::{NoTrace, StepSink, Traced};

/// Largest valid code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Code point of a single character.
///
/// `input` must contain exactly one code point; length in bytes is irrelevant.
pub fn char_to_code(input: &str) -> Result<u32> {
    char_to_code_with(input, &mut NoTrace)
}

/// [`char_to_code`] with the code point's binary and hexadecimal forms.
pub fn char_to_code_traced(input: &str) -> Result<Traced<u32>> {
    Traced::capture(|trace| char_to_code_with(input, trace))
}

/// Character for a code point.
///
/// # Errors
/// * `CodePointOutOfRange` outside `[0, 0x10FFFF]`
/// * `InvalidCodePoint` for surrogates
pub fn code_to_char(code_point: i64) -> Result<char> {
    code_to_char_with(code_point, &mut NoTrace)
}

/// [`code_to_char`] with the code point's binary and hexadecimal forms.
pub fn code_to_char_traced(code_point: i64) -> Result<Traced<char>> {
    Traced::capture(|trace| code_to_char_with(code_point, trace))
}

fn char_to_code_with<S: StepSink>(input: &str, sink: &mut S) -> Result<u32> {
    let mut chars = input.chars();
    let c = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(ConversionError::InvalidCharacterInput {
                input: input.to_string(),
                count: input.chars().count(),
            })
        }
    };

    let code_point = u32::from(c);
    sink.note(|| format!("Character: '{}'", c));
    sink.note(|| format!("ASCII/Unicode code point: {}", code_point));
    describe_code_point(code_point, sink);
    sink.conclude(
        || format!("Final result: '{}' has code point {}", c, code_point),
        || code_point.to_string(),
    );
    Ok(code_point)
}

fn code_to_char_with<S: StepSink>(code_point: i64, sink: &mut S) -> Result<char> {
    let value = u32::try_from(code_point)
        .ok()
        .filter(|&v| v <= MAX_CODE_POINT)
        .ok_or(ConversionError::CodePointOutOfRange { code_point })?;
    let c = char::from_u32(value).ok_or(ConversionError::InvalidCodePoint { code_point: value })?;

    sink.note(|| format!("Code point: {}", value));
    sink.note(|| format!("Character: '{}'", c));
    describe_code_point(value, sink);
    sink.conclude(
        || format!("Final result: code point {} is '{}'", value, c),
        || c.to_string(),
    );
    Ok(c)
}

fn describe_code_point<S: StepSink>(code_point: u32, sink: &mut S) {
    sink.note(|| {
        format!(
            "Binary representation: {}",
            dec_to_bin(i64::from(code_point), BinaryMode::default())
        )
    });
    sink.note(|| format!("Hexadecimal representation: {}", dec_to_hex(i64::from(code_point))));
    sink.note(|| format!("Unicode notation: U+{:04X}", code_point));
}
