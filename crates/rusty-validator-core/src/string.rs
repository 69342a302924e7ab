//! String shape validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII letters, digits and ASCII whitespace only
static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?-u:\s)|[A-Za-z0-9])*$").expect("alphanumeric pattern is valid")
});

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("zip code pattern is valid"));

/// Length checks count bytes, not characters.
pub fn has_min_length(s: &str, min: usize) -> bool {
    s.len() >= min
}

pub fn has_max_length(s: &str, max: usize) -> bool {
    s.len() <= max
}

/// Letters, digits and whitespace only. The empty string passes.
pub fn is_alphanumeric(s: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(s)
}

/// Five-digit US ZIP code
pub fn is_zip_code(s: &str) -> bool {
    ZIP_REGEX.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(has_min_length("hello", 3));
        assert!(has_min_length("hello", 5));
        assert!(!has_min_length("hi", 3));
        assert!(!has_min_length("123 Ramona", 12));

        assert!(has_max_length("Pittsburgh", 25));
        assert!(has_max_length("hello", 5));
        assert!(!has_max_length("verylongstring", 5));
    }

    #[test]
    fn test_length_counts_bytes() {
        // "é" is two bytes in UTF-8
        assert!(has_min_length("é", 2));
        assert!(!has_max_length("é", 1));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric("John Smith 3rd"));
        assert!(is_alphanumeric("tab\tand\nnewline"));
        assert!(is_alphanumeric(""));

        assert!(!is_alphanumeric("abcdef123@"));
        assert!(!is_alphanumeric("snake_case"));
        assert!(!is_alphanumeric("café"));
    }

    #[test]
    fn test_zip_code() {
        assert!(is_zip_code("90210"));
        assert!(is_zip_code("00501"));

        assert!(!is_zip_code("9021"));
        assert!(!is_zip_code("902101"));
        assert!(!is_zip_code("90210-1234"));
        assert!(!is_zip_code("abcde"));
        assert!(!is_zip_code(""));
    }
}
