//! Email format checks shared by the user registry.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("email pattern is a valid regex")
});

/// Returns `false` for an absent or empty email, otherwise whether the whole
/// string matches `local-part@domain`.
pub fn is_valid_email(email: Option<&str>) -> bool {
    match email {
        None => false,
        Some(email) if email.is_empty() => false,
        Some(email) => EMAIL_PATTERN.is_match(email),
    }
}

/// Domain part of a valid email address.
pub fn extract_domain(email: &str) -> Option<&str> {
    if !is_valid_email(Some(email)) {
        return None;
    }
    email.split_once('@').map(|(_, domain)| domain)
}

/// Whether a valid email belongs to one of `domains` (exact match).
pub fn is_corporate_email(email: &str, domains: &[&str]) -> bool {
    match extract_domain(email) {
        Some(domain) => domains.contains(&domain),
        None => false,
    }
}
