//! Email address validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length of the part before `@`
const MAX_LOCAL_LEN: usize = 64;
/// Maximum length of the part after `@`
const MAX_DOMAIN_LEN: usize = 255;

// Dot-atom local part: printable specials allowed, dots only between atoms
static LOCAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("email local-part pattern is valid")
});

// Hostname labels, at least two, alphabetic TLD of 2+ characters
static DOMAIN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$")
        .expect("email domain pattern is valid")
});

/// Validates email address format
///
/// Checks for:
/// - Exactly one `@` with content on both sides
/// - A dot-atom local part (no leading, trailing or doubled dots)
/// - A dotted hostname whose labels don't start or end with `-`
/// - An alphabetic top-level domain of at least 2 characters
///
/// ```
/// use rusty_validator_core::is_valid_email;
/// assert!(is_valid_email("john@msn.com"));
/// assert!(!is_valid_email("john@msn"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > MAX_LOCAL_LEN {
        return false;
    }

    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN {
        return false;
    }

    LOCAL_REGEX.is_match(local) && DOMAIN_REGEX.is_match(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("john@msn.com"));
        assert!(is_valid_email("test.user@example.co.uk"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@example-domain.com"));
        assert!(is_valid_email("o'brien@example.ie"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("john@msn"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user@-example.com"));
        assert!(!is_valid_email(".user@example.com"));
        assert!(!is_valid_email("us..er@example.com"));
        assert!(!is_valid_email("user name@example.com"));
    }

    #[test]
    fn test_length_limits() {
        let long_local = format!("{}@example.com", "a".repeat(65));
        assert!(!is_valid_email(&long_local));

        let max_local = format!("{}@example.com", "a".repeat(64));
        assert!(is_valid_email(&max_local));
    }
}
