//! Tests for integer conversion to and from arbitrary bases

mod common;

use common::{all_bases, base};
use numbase::engine::{from_base, to_base, Base, ConversionError};

#[test]
fn test_to_base_known_values() {
    assert_eq!(to_base(10, Base::BINARY), "1010");
    assert_eq!(to_base(255, Base::HEXADECIMAL), "FF");
    assert_eq!(to_base(64, Base::OCTAL), "100");
    assert_eq!(to_base(35, base(12)), "2B");
    assert_eq!(to_base(-10, Base::BINARY), "-1010");
    assert_eq!(to_base(-255, Base::HEXADECIMAL), "-FF");
}

#[test]
fn test_zero_is_zero_in_every_base() {
    for b in all_bases() {
        assert_eq!(to_base(0, b), "0", "zero in base {} should be \"0\"", b);
    }
}

#[test]
fn test_to_base_uses_uppercase_digits() {
    let numeral = to_base(0xABCDEF, Base::HEXADECIMAL);
    assert_eq!(numeral.to_string(), "ABCDEF");
    assert!(!numeral.is_negative());
}

#[test]
fn test_to_base_extremes() {
    assert_eq!(
        to_base(i64::MAX, Base::HEXADECIMAL),
        "7FFFFFFFFFFFFFFF"
    );
    assert_eq!(
        to_base(i64::MIN, Base::HEXADECIMAL),
        "-8000000000000000"
    );
}

#[test]
fn test_from_base_known_values() {
    assert_eq!(from_base("1010", Base::BINARY), Ok(10));
    assert_eq!(from_base("FF", Base::HEXADECIMAL), Ok(255));
    assert_eq!(from_base("777", Base::OCTAL), Ok(511));
    assert_eq!(from_base("-1010", Base::BINARY), Ok(-10));
    assert_eq!(from_base("0", base(7)), Ok(0));
}

#[test]
fn test_from_base_is_case_insensitive() {
    assert_eq!(from_base("ff", Base::HEXADECIMAL), Ok(255));
    assert_eq!(from_base("Ff", Base::HEXADECIMAL), Ok(255));
    assert_eq!(from_base("-aB", Base::HEXADECIMAL), Ok(-171));
}

#[test]
fn test_from_base_rejects_foreign_digits() {
    for (input, radix) in [("102", 2), ("8", 8), ("G", 16), ("1.5", 10), ("12a", 10)] {
        let err = from_base(input, base(radix)).unwrap_err();
        assert!(
            matches!(err, ConversionError::InvalidNumeral { .. }),
            "'{}' in base {} should be rejected, got {:?}",
            input,
            radix,
            err
        );
    }
}

#[test]
fn test_from_base_rejects_empty_and_bare_sign() {
    for input in ["", "-"] {
        assert!(matches!(
            from_base(input, Base::DECIMAL),
            Err(ConversionError::InvalidNumeral { .. })
        ));
    }
}

#[test]
fn test_from_base_rejects_misplaced_sign() {
    for input in ["--5", "5-", "1-0"] {
        assert!(
            matches!(
                from_base(input, Base::DECIMAL),
                Err(ConversionError::InvalidNumeral { .. })
            ),
            "'{}' should be rejected",
            input
        );
    }
}

#[test]
fn test_from_base_error_names_the_bad_digit() {
    let err = from_base("1012", Base::BINARY).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid number '1012' for base 2: '2' is not a base-2 digit"
    );
}

#[test]
fn test_from_base_overflow() {
    assert_eq!(
        from_base("8000000000000000", Base::HEXADECIMAL),
        Err(ConversionError::Overflow {
            input: "8000000000000000".to_string(),
            base: 16
        })
    );
    assert!(matches!(
        from_base("FFFFFFFFFFFFFFFFF", Base::HEXADECIMAL),
        Err(ConversionError::Overflow { .. })
    ));
}

#[test]
fn test_from_base_accepts_i64_min() {
    assert_eq!(from_base("-8000000000000000", Base::HEXADECIMAL), Ok(i64::MIN));
    assert_eq!(
        from_base("-9223372036854775808", Base::DECIMAL),
        Ok(i64::MIN)
    );
}

#[test]
fn test_invalid_base_is_rejected_before_conversion() {
    for radix in [-2, 0, 1, 17, 36] {
        assert_eq!(
            Base::new(radix),
            Err(ConversionError::InvalidBase { base: radix })
        );
    }
}
