//! URL and IP address validation

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::IpAddr;

// scheme://[userinfo@]host[:port][/path][?query][#fragment]
// host is a dotted hostname or a bracketed IPv6 literal
static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^[A-Za-z][A-Za-z0-9+.\-]*://
        (?:[^\s@/?\#]+@)?
        (?:
            \[[0-9A-Fa-f:.]+\]
          | [A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?
            (?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]*[A-Za-z0-9])?)*
        )
        (?::[0-9]{1,5})?
        (?:[/?\#]\S*)?$
        ",
    )
    .expect("url pattern is valid")
});

// Schemes that carry no authority: mailto:, news:, file:///path
static HOSTLESS_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:mailto|news|file):\S+$").expect("hostless url pattern is valid")
});

/// Validates URL format
///
/// Any scheme followed by `://` and a host is accepted. `mailto:`, `news:`
/// and `file:` only need a non-empty remainder.
///
/// ```
/// use rusty_validator_core::is_valid_url;
/// assert!(is_valid_url("http://www.test.com/"));
/// assert!(!is_valid_url("www.test.com"));
/// ```
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url) || HOSTLESS_URL_REGEX.is_match(url)
}

/// Validates an IPv4 or IPv6 address in textual form
pub fn is_valid_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}
