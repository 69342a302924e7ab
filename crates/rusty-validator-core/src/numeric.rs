//! Numeric literal recognition

use once_cell::sync::Lazy;
use regex::Regex;

// Decimal integer or float with optional sign and exponent. Surrounding
// whitespace is tolerated; hex, octal and binary prefixes are not.
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?-u:\s)*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?(?-u:\s)*$")
        .expect("numeric pattern is valid")
});

/// Checks whether a string is a numeric literal
///
/// ```
/// use rusty_validator_core::is_numeric;
/// assert!(is_numeric("42"));
/// assert!(is_numeric("-1.5e3"));
/// assert!(!is_numeric("fourteen"));
/// ```
pub fn is_numeric(s: &str) -> bool {
    NUMERIC_REGEX.is_match(s)
}

/// Parses a numeric literal as accepted by [`is_numeric`]
pub fn parse_numeric(s: &str) -> Option<f64> {
    if !is_numeric(s) {
        return None;
    }

    s.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings() {
        assert!(is_numeric("0"));
        assert!(is_numeric("90210"));
        assert!(is_numeric("-17"));
        assert!(is_numeric("+3.14"));
        assert!(is_numeric(".5"));
        assert!(is_numeric("5."));
        assert!(is_numeric("1e10"));
        assert!(is_numeric("2.5E-3"));
        assert!(is_numeric("  42  "));
    }

    #[test]
    fn test_non_numeric_strings() {
        assert!(!is_numeric(""));
        assert!(!is_numeric(" "));
        assert!(!is_numeric("fourteen"));
        assert!(!is_numeric("0x1A"));
        assert!(!is_numeric("1,000"));
        assert!(!is_numeric("12abc"));
        assert!(!is_numeric("."));
        assert!(!is_numeric("e5"));
        assert!(!is_numeric("--1"));
    }

    #[test]
    fn test_parse_numeric() {
        assert_eq!(parse_numeric("42"), Some(42.0));
        assert_eq!(parse_numeric(" -1.5 "), Some(-1.5));
        assert_eq!(parse_numeric("5."), Some(5.0));
        assert_eq!(parse_numeric("1e3"), Some(1000.0));
        assert_eq!(parse_numeric("abc"), None);
    }
}
