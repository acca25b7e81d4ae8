//! Conversion engine - pure, stateless base conversion with optional
//! step-by-step narration
//!
//! Nothing in this module performs I/O or logs. Every operation either
//! returns a complete value or a [`ConversionError`].

pub mod base;
pub mod bridge;
pub mod character;
pub mod detect;
pub mod error;
pub mod fixed;
pub mod float;
pub mod integer;
pub mod numeral;
pub mod trace;

pub use base::{Base, DIGITS, MAX_BASE, MIN_BASE};
pub use bridge::{convert, convert_traced, Route};
pub use character::{
    char_to_code, char_to_code_traced, code_to_char, code_to_char_traced, MAX_CODE_POINT,
};
pub use detect::detect_base;
pub use error::{ConversionError, Result};
pub use fixed::{
    dec_to_bin, dec_to_bin_traced, dec_to_hex, dec_to_hex_traced, dec_to_oct, dec_to_oct_traced,
    twos_complement, BinaryMode,
};
pub use float::{to_base_float, to_base_float_traced, DEFAULT_PRECISION};
pub use integer::{from_base, from_base_traced, to_base, to_base_traced};
pub use numeral::Numeral;
pub use trace::{ConversionTrace, DigitStep, NoTrace, StepSink, TraceLine, Traced};
