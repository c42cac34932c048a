//! Password value object and password digest.
//!
//! The digest is a single unsalted SHA-256 over the UTF-8 bytes, hex
//! encoded. It is a proof-of-concept scheme, kept because stored hashes
//! depend on it; it is not suitable for production credential storage.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::config::MIN_PASSWORD_LENGTH;
use crate::errors::{AppError, AppResult};

/// A plaintext password that satisfies the complexity policy.
///
/// Requires at least [`MIN_PASSWORD_LENGTH`] characters with one uppercase
/// letter, one lowercase letter, one digit and one punctuation or symbol.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

// Never expose the plaintext in debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}

impl Password {
    /// Validate a plaintext password against the policy.
    ///
    /// # Errors
    /// Returns `InvalidPassword` naming every unmet requirement.
    pub fn parse(plain_text: &str) -> AppResult<Self> {
        let missing = Self::unmet_requirements(plain_text);
        if !missing.is_empty() {
            return Err(AppError::invalid_password(format!(
                "password must contain {}",
                missing.join(", ")
            )));
        }
        Ok(Self(plain_text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// One-way digest of this password.
    pub fn digest(&self) -> String {
        digest(&self.0)
    }

    fn unmet_requirements(plain_text: &str) -> Vec<String> {
        let mut missing = Vec::new();
        if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
            missing.push(format!("at least {} characters", MIN_PASSWORD_LENGTH));
        }
        if !plain_text.chars().any(char::is_uppercase) {
            missing.push("an uppercase letter".to_string());
        }
        if !plain_text.chars().any(char::is_lowercase) {
            missing.push("a lowercase letter".to_string());
        }
        if !plain_text.chars().any(|c| c.is_ascii_digit()) {
            missing.push("a digit".to_string());
        }
        if !plain_text.chars().any(|c| c.is_ascii_punctuation()) {
            missing.push("a symbol".to_string());
        }
        missing
    }
}

/// Deterministic hex-encoded SHA-256 of the password bytes.
pub fn digest(plain_text: &str) -> String {
    hex::encode(Sha256::digest(plain_text.as_bytes()))
}

/// Check a plaintext password against a stored digest.
pub fn verify(plain_text: &str, password_hash: &str) -> bool {
    digest(plain_text) == password_hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        let password = Password::parse("Secur3Pass!").unwrap();
        assert_eq!(password.as_str(), "Secur3Pass!");
    }

    #[test]
    fn test_password_minimum_length() {
        // Exactly 8 characters with every class present
        assert!(Password::parse("Abcde1!x").is_ok());
        assert!(Password::parse("Abcd1!x").is_err());
    }

    #[test]
    fn test_each_missing_class_is_rejected() {
        for weak in ["lowercase1!", "UPPERCASE1!", "NoDigits!!", "NoSymbol123"] {
            let err = Password::parse(weak).unwrap_err();
            assert!(matches!(err, AppError::InvalidPassword(_)), "{} should be rejected", weak);
        }
    }

    #[test]
    fn test_error_lists_requirements() {
        let err = Password::parse("short").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("at least 8 characters"));
        assert!(message.contains("a digit"));
    }

    #[test]
    fn test_digest_is_sha256_hex() {
        assert_eq!(
            digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_digest_is_deterministic() {
        let password = Password::parse("Secur3Pass!").unwrap();
        assert_eq!(password.digest(), digest("Secur3Pass!"));
        assert!(verify("Secur3Pass!", &password.digest()));
        assert!(!verify("secur3pass!", &password.digest()));
    }

    #[test]
    fn test_debug_redacts_plaintext() {
        let password = Password::parse("Secur3Pass!").unwrap();
        assert!(!format!("{:?}", password).contains("Secur3Pass"));
    }
}
