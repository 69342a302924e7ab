//! Phone number validation

use once_cell::sync::Lazy;
use regex::Regex;

// [+CC ][(]AAA[)]<sep>EEE<sep>NNNN, where <sep> is whitespace, a dot or a hyphen
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\+[0-9]{1,2}[\t\n\x0B\x0C\r ])?\(?[0-9]{3}\)?[\t\n\x0B\x0C\r .\-][0-9]{3}[\t\n\x0B\x0C\r .\-][0-9]{4}$",
    )
    .expect("phone pattern is valid")
});

/// Validates a North American style phone number
///
/// ```
/// use rusty_validator_core::is_valid_phone;
/// assert!(is_valid_phone("555-234-5678"));
/// assert!(is_valid_phone("+1 (555) 234-5678"));
/// assert!(!is_valid_phone("5552345678"));
/// ```
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
