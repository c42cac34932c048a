//! Email value object.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::{EMAIL_MASK, EMAIL_PATTERN};
use crate::errors::{AppError, AppResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// A syntactically valid, normalized email address.
///
/// Normalization (trim + lowercase) happens before validation, so two
/// emails differing only in case or surrounding whitespace are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    ///
    /// # Errors
    /// Returns `InvalidEmail` when the normalized value does not match
    /// `localpart@domain.tld`.
    pub fn parse(value: &str) -> AppResult<Self> {
        let normalized = Self::normalize(value);
        if !EMAIL_REGEX.is_match(&normalized) {
            return Err(AppError::invalid_email(format!(
                "invalid email format: {}",
                value
            )));
        }
        Ok(Self(normalized))
    }

    /// Canonical form used for storage and lookups.
    pub fn normalize(value: &str) -> String {
        value.trim().to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Partially hidden form for display and logs: `j***@example.com`.
    pub fn masked(&self) -> String {
        // Validation guarantees exactly one '@' and a non-empty local part
        let (local, domain) = self.0.split_once('@').unwrap_or((&self.0, ""));
        let first = local.chars().next().map(String::from).unwrap_or_default();
        format!("{}{}@{}", first, EMAIL_MASK, domain)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Email {
    type Error = AppError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Email {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for value in ["john@example.com", "a.b+tag@sub-domain.co", "x_y-z@d.io"] {
            assert!(Email::parse(value).is_ok(), "{} should be valid", value);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for value in ["", "plain", "@example.com", "john@", "john@example", "jo hn@example.com", "a@b@c.com"] {
            let err = Email::parse(value).unwrap_err();
            assert!(matches!(err, AppError::InvalidEmail(_)), "{} should be rejected", value);
        }
    }

    #[test]
    fn test_normalization() {
        let email = Email::parse("  John.Doe@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "john.doe@example.com");
        assert_eq!(email, Email::parse("john.doe@example.com").unwrap());
    }

    #[test]
    fn test_masked() {
        let email = Email::parse("john@example.com").unwrap();
        assert_eq!(email.masked(), "j***@example.com");
    }

    #[test]
    fn test_display_and_serialize() {
        let email = Email::parse("jane@example.org").unwrap();
        assert_eq!(email.to_string(), "jane@example.org");
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"jane@example.org\"");
    }
}
