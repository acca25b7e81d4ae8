//! Guess the base of an unlabeled numeral

use super::base::Base;

/// Classify `input` as the narrowest base all of its digits fit.
///
/// A `0b`, `0o` or `0x` prefix (any case) decides immediately, without
/// looking at the rest. Otherwise the optionally `-`-prefixed body is tried
/// against binary, octal, decimal, then hexadecimal digits, so `"101"` is
/// binary even though it is valid in every larger base. `None` means no
/// base in that list fits.
pub fn detect_base(input: &str) -> Option<Base> {
    let trimmed = input.trim();

    let prefix = trimmed.get(..2).map(str::to_ascii_lowercase);
    match prefix.as_deref() {
        Some("0b") => return Some(Base::BINARY),
        Some("0o") => return Some(Base::OCTAL),
        Some("0x") => return Some(Base::HEXADECIMAL),
        _ => {}
    }

    let body = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if body.is_empty() {
        return None;
    }

    [Base::BINARY, Base::OCTAL, Base::DECIMAL, Base::HEXADECIMAL]
        .into_iter()
        .find(|&base| body.chars().all(|c| base.digit_value(c).is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_wins_without_validation() {
        assert_eq!(detect_base("0xZZ"), Some(Base::HEXADECIMAL));
        assert_eq!(detect_base("  0B2 "), Some(Base::BINARY));
    }

    #[test]
    fn bare_sign_is_unknown() {
        assert_eq!(detect_base("-"), None);
        assert_eq!(detect_base(""), None);
    }
}
