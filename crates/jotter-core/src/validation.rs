//! Local shape checks for credentials, run before any network call.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

const MIN_PASSWORD_CHARS: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("valid email regex")
});

/// A locally detected input problem. `Display` is the field message shown to
/// the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter email and password")]
    MissingCredentials,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least 8 characters")]
    PasswordTooShort,
    #[error("Password must contain at least one uppercase letter")]
    PasswordNeedsUppercase,
    #[error("Password must contain at least one lowercase letter")]
    PasswordNeedsLowercase,
    #[error("Password must contain at least one digit")]
    PasswordNeedsDigit,
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.starts_with('.') || email.contains("..") || !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Reports the first failing rule: length, then uppercase, lowercase, digit.
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordNeedsUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordNeedsLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordNeedsDigit);
    }
    Ok(())
}

pub fn validate_log_in(email: &str, password: &str) -> Result<(), ValidationError> {
    if is_blank(email) || is_blank(password) {
        return Err(ValidationError::MissingCredentials);
    }
    validate_email(email)?;
    validate_password(password)
}

pub fn validate_sign_up(email: &str, password: &str, repeat: &str) -> Result<(), ValidationError> {
    if is_blank(email) || is_blank(password) || is_blank(repeat) {
        return Err(ValidationError::MissingCredentials);
    }
    if password != repeat {
        return Err(ValidationError::PasswordMismatch);
    }
    validate_email(email)?;
    validate_password(password)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for email in ["a@b.com", "first.last+tag@mail.example.org", "X_Y@Sub.Domain.io"] {
            assert_eq!(validate_email(email), Ok(()), "{email}");
        }
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in [
            "",
            "plain",
            "a@b",
            "@b.com",
            ".a@b.com",
            "a..b@c.com",
            "a@b..com",
            "a b@c.com",
            "a@b.c",
        ] {
            assert_eq!(validate_email(email), Err(ValidationError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn password_rules_apply_in_order() {
        assert_eq!(validate_password("abc"), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            validate_password("abcdefgh1"),
            Err(ValidationError::PasswordNeedsUppercase)
        );
        assert_eq!(
            validate_password("ABCDEFGH1"),
            Err(ValidationError::PasswordNeedsLowercase)
        );
        assert_eq!(
            validate_password("Abcdefgh"),
            Err(ValidationError::PasswordNeedsDigit)
        );
        assert_eq!(validate_password("Abcdef12"), Ok(()));
    }

    #[test]
    fn sign_up_checks_presence_then_match_then_shape() {
        assert_eq!(
            validate_sign_up("a@b.com", "Abcdef12", ""),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_sign_up("bad", "Abcdef12", "Abcdef13"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_sign_up("bad", "abc", "abc"),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_sign_up("a@b.com", "abc", "abc"),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_sign_up("a@b.com", "Abcdef12", "Abcdef12"), Ok(()));
    }

    #[test]
    fn log_in_requires_both_fields() {
        assert_eq!(
            validate_log_in("   ", "Abcdef12"),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(validate_log_in("a@b.com", "Abcdef12"), Ok(()));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingCredentials.to_string(),
            "Enter email and password"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
    }
}
