//! Property tests for conversion invariants

mod common;

use common::base;
use numbase::engine::{
    char_to_code, code_to_char, convert, dec_to_bin, dec_to_hex, dec_to_oct, detect_base,
    from_base, to_base, to_base_float, to_base_traced, Base, BinaryMode,
};
use proptest::prelude::*;

fn any_base() -> impl Strategy<Value = Base> {
    (2i64..=16).prop_map(base)
}

proptest! {
    /// Converting to a base and back recovers the original value.
    #[test]
    fn to_base_then_from_base_is_identity(n in any::<i64>(), b in any_base()) {
        let numeral = to_base(n, b);
        prop_assert_eq!(from_base(&numeral.to_string(), b), Ok(n));
    }

    /// Lowercase input parses to the same value as uppercase.
    #[test]
    fn from_base_ignores_case(n in any::<i64>(), b in any_base()) {
        let upper = to_base(n, b).to_string();
        prop_assert_eq!(from_base(&upper.to_lowercase(), b), Ok(n));
    }

    /// Output digits are always canonical: uppercase, no leading zeros.
    #[test]
    fn to_base_output_is_canonical(n in any::<i64>(), b in any_base()) {
        let numeral = to_base(n, b);
        let digits = numeral.integer_digits();
        prop_assert!(digits == "0" || !digits.starts_with('0'), "leading zero in {}", numeral);
        prop_assert!(!digits.chars().any(|c| c.is_ascii_lowercase()));
        prop_assert_eq!(numeral.is_negative(), n < 0);
    }

    /// Bridged conversion equals decoding then encoding.
    #[test]
    fn convert_goes_through_decimal(n in any::<i64>(), from in any_base(), to in any_base()) {
        let input = to_base(n, from).to_string();
        prop_assert_eq!(convert(&input, from, to).unwrap(), to_base(n, to));
    }

    /// Bridging there and back returns the canonical original numeral.
    #[test]
    fn bridge_there_and_back(n in any::<i64>(), b1 in any_base(), b2 in any_base()) {
        let original = to_base(n, b1);
        let there = convert(&original.to_string().to_lowercase(), b1, b2).unwrap();
        let back = convert(&there.to_string(), b2, b1).unwrap();
        prop_assert_eq!(back, original);
    }

    /// Shift-based converters agree with the generic converter on non-negative input.
    #[test]
    fn shift_converters_match_generic(n in 0i64..=i64::MAX) {
        prop_assert_eq!(dec_to_bin(n, BinaryMode::default()), to_base(n, Base::BINARY));
        prop_assert_eq!(dec_to_oct(n), to_base(n, Base::OCTAL));
        prop_assert_eq!(dec_to_hex(n), to_base(n, Base::HEXADECIMAL));
    }

    /// The trace holds one record per output digit and states the same result.
    #[test]
    fn trace_agrees_with_value(n in any::<i64>(), b in any_base()) {
        let traced = to_base_traced(n, b);
        prop_assert_eq!(traced.trace.digit_steps().count(), traced.value.digit_count());
        let rendered = traced.value.to_string();
        prop_assert_eq!(traced.trace.result(), Some(rendered.as_str()));
    }

    /// Fractional digits never exceed the requested precision.
    #[test]
    fn float_respects_precision(x in -1.0e12f64..1.0e12, b in any_base(), precision in 1usize..20) {
        let numeral = to_base_float(x, b, precision).unwrap();
        let fraction = numeral.fraction_digits().unwrap_or("");
        prop_assert!(!fraction.is_empty() && fraction.len() <= precision);
    }

    /// Every valid character survives a trip through its code point.
    #[test]
    fn characters_round_trip(c in any::<char>()) {
        let code_point = char_to_code(&c.to_string()).unwrap();
        prop_assert_eq!(code_to_char(i64::from(code_point)), Ok(c));
    }

    /// Without a prefix, the detected base always parses the input.
    #[test]
    fn detected_base_parses_input(s in "-?[1-9a-fA-F][0-9a-fA-F]{0,11}") {
        let b = detect_base(&s);
        prop_assert!(b.is_some(), "hex digits should always be detected: {}", s);
        if let Some(b) = b {
            prop_assert!(from_base(&s, b).is_ok(), "'{}' rejected in base {}", s, b);
        }
    }
}
