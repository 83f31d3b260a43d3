//! New-user registration validation.
//!
//! Server-side checks for the sign-up form: display name and email shape.
//! Password strength lives next to the hashing code in the API crate.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum length for a display name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Loose email shape check: something@something.something, no whitespace.
/// Deliverability is proven by actually using the address, not here.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Compiled email regex. Compiled once, reused forever.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Validate a display name: non-empty after trimming, bounded length.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Name must not be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(format!(
            "Name exceeds maximum length of {MAX_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate an email address used as the login id.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(format!(
            "Email exceeds maximum length of {MAX_EMAIL_LENGTH} characters"
        ));
    }
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_accepted() {
        assert!(validate_name("Hanako Sato").is_ok());
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_overlong_name_rejected() {
        assert!(validate_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_valid_email_accepted() {
        assert!(validate_email("student@example.com").is_ok());
        assert!(validate_email("a.b+c@mail.example.co.jp").is_ok());
    }

    #[test]
    fn test_malformed_email_rejected() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("two words@example.com").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_overlong_email_rejected() {
        let email = format!("{}@example.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(validate_email(&email).is_err());
    }
}
