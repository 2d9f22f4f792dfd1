//! Validation utilities for the onboarding workflows.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length requirement.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum email length requirement.
pub const MAX_EMAIL_LENGTH: usize = 255;

/// Email validation regex (simplified RFC 5322).
/// The pattern is a constant, so the `expect()` here is acceptable -
/// if this fails, it's a programming error.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("EMAIL_REGEX is a valid regex pattern")
});

/// Check that an email address is syntactically valid.
///
/// Callers trim the address first; casing is irrelevant here.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= MAX_EMAIL_LENGTH && EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("a@acme.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld@twice.com"));
        assert!(!is_valid_email("@acme.com"));
    }

    #[test]
    fn rejects_overlong_addresses() {
        let local = "a".repeat(MAX_EMAIL_LENGTH);
        assert!(!is_valid_email(&format!("{local}@acme.com")));
    }
}
