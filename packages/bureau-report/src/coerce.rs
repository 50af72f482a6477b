//! Lenient numeric coercion for bureau values.
//!
//! Bureau reports carry numbers as free text. Parsing reads the longest
//! numeric prefix and ignores whatever follows it, so `"742 pts"` is 742 and
//! `"12.5%"` is 12.5. Text with no numeric prefix yields `None`.

use regex::Regex;
use std::sync::LazyLock;

/// Leading integer: optional sign, then hexadecimal (`0x`) or decimal digits.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INTEGER_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)(?:0[xX]([0-9a-fA-F]+)|([0-9]+))").expect("valid regex")
});

/// Leading decimal: optional sign, digits with optional fraction, optional exponent.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DECIMAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("valid regex")
});

/// Parse the leading integer of a text value.
///
/// # Examples
/// ```
/// use bureau_report::coerce::to_integer;
///
/// assert_eq!(to_integer("742"), Some(742));
/// assert_eq!(to_integer("  12abc"), Some(12));
/// assert_eq!(to_integer("0x1A"), Some(26));
/// assert_eq!(to_integer("abc"), None);
/// ```
#[must_use]
pub fn to_integer(raw: &str) -> Option<i64> {
    let caps = INTEGER_PREFIX.captures(raw.trim_start())?;
    let negative = caps.get(1).is_some_and(|sign| sign.as_str() == "-");

    let magnitude = if let Some(hex) = caps.get(2) {
        i64::from_str_radix(hex.as_str(), 16).ok()?
    } else {
        caps.get(3)?.as_str().parse::<i64>().ok()?
    };

    Some(if negative { -magnitude } else { magnitude })
}

/// Parse the leading decimal number of a text value.
///
/// # Examples
/// ```
/// use bureau_report::coerce::to_decimal;
///
/// assert_eq!(to_decimal("1500.75"), Some(1500.75));
/// assert_eq!(to_decimal("-3e2 units"), Some(-300.0));
/// assert_eq!(to_decimal("n/a"), None);
/// ```
#[must_use]
pub fn to_decimal(raw: &str) -> Option<f64> {
    let matched = DECIMAL_PREFIX.find(raw.trim_start())?;
    matched
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_integer_plain() {
        assert_eq!(to_integer("0"), Some(0));
        assert_eq!(to_integer("742"), Some(742));
        assert_eq!(to_integer("-5"), Some(-5));
        assert_eq!(to_integer("+5"), Some(5));
    }

    #[test]
    fn test_to_integer_prefix() {
        assert_eq!(to_integer("4 accounts"), Some(4));
        assert_eq!(to_integer("12.9"), Some(12));
        assert_eq!(to_integer("1e3"), Some(1));
        assert_eq!(to_integer("\n  8\n"), Some(8));
    }

    #[test]
    fn test_to_integer_hex() {
        assert_eq!(to_integer("0x10"), Some(16));
        assert_eq!(to_integer("-0XfF"), Some(-255));
    }

    #[test]
    fn test_to_integer_rejects_non_numeric() {
        assert_eq!(to_integer(""), None);
        assert_eq!(to_integer("   "), None);
        assert_eq!(to_integer("abc"), None);
        assert_eq!(to_integer("-"), None);
        assert_eq!(to_integer("one 2"), None);
    }

    #[test]
    fn test_to_integer_overflow() {
        assert_eq!(to_integer("99999999999999999999999"), None);
    }

    #[test]
    fn test_to_decimal_plain() {
        assert_eq!(to_decimal("0"), Some(0.0));
        assert_eq!(to_decimal("1500.75"), Some(1500.75));
        assert_eq!(to_decimal("-42"), Some(-42.0));
        assert_eq!(to_decimal(".5"), Some(0.5));
        assert_eq!(to_decimal("7."), Some(7.0));
    }

    #[test]
    fn test_to_decimal_prefix() {
        assert_eq!(to_decimal("12.5%"), Some(12.5));
        assert_eq!(to_decimal("1,234"), Some(1.0));
        assert_eq!(to_decimal("2.5e1x"), Some(25.0));
        assert_eq!(to_decimal("3e"), Some(3.0));
    }

    #[test]
    fn test_to_decimal_rejects_non_numeric() {
        assert_eq!(to_decimal(""), None);
        assert_eq!(to_decimal("."), None);
        assert_eq!(to_decimal("abc"), None);
        assert_eq!(to_decimal("Infinity"), None);
        assert_eq!(to_decimal("NaN"), None);
    }

    #[test]
    fn test_to_decimal_rejects_non_finite() {
        assert_eq!(to_decimal("1e400"), None);
    }
}
