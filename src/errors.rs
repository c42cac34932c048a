//! Centralized error handling.
//!
//! Provides a unified error type for the whole crate. Transports map
//! failures through [`AppError::code`] rather than matching on messages.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Value object construction
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // Use case outcomes
    #[error("User with email {0} already exists")]
    UserAlreadyExists(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Storage backend
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error code for callers translating into their own responses
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidEmail(_) => "INVALID_EMAIL",
            AppError::InvalidPassword(_) => "INVALID_PASSWORD",
            AppError::InvalidArgument(_) => "INVALID_ARGUMENT",
            AppError::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_user_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_user_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::UserNotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn invalid_email(msg: impl Into<String>) -> Self {
        AppError::InvalidEmail(msg.into())
    }

    pub fn invalid_password(msg: impl Into<String>) -> Self {
        AppError::InvalidPassword(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        AppError::InvalidArgument(msg.into())
    }

    pub fn already_exists(email: impl Into<String>) -> Self {
        AppError::UserAlreadyExists(email.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct_per_failure_kind() {
        assert_eq!(AppError::UserNotFound.code(), "USER_NOT_FOUND");
        assert_eq!(AppError::InvalidCredentials.code(), "INVALID_CREDENTIALS");
        assert_eq!(AppError::already_exists("a@b.co").code(), "USER_ALREADY_EXISTS");
    }

    #[test]
    fn test_option_ext() {
        let missing: Option<u8> = None;
        assert!(matches!(missing.ok_or_user_not_found(), Err(AppError::UserNotFound)));
        assert_eq!(Some(3).ok_or_user_not_found().unwrap(), 3);
    }
}
