//! User domain entity.

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Email, UserId};
use crate::errors::AppResult;

/// User aggregate root.
///
/// Identity and creation time are fixed at construction. Two users are
/// equal when their ids are equal, whatever their other fields hold.
#[derive(Clone, Serialize)]
pub struct User {
    id: UserId,
    email: Email,
    #[serde(skip_serializing)]
    password_hash: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with a fresh id.
    ///
    /// # Errors
    /// Returns `InvalidEmail` if `email` is malformed.
    pub fn new(email: &str) -> AppResult<Self> {
        Ok(Self::with_email(Email::parse(email)?))
    }

    /// Create a new active user from an already validated email.
    pub fn with_email(email: Email) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash: String::new(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// Rebuild a user from persisted state.
    pub fn restore(
        id: UserId,
        email: Email,
        password_hash: String,
        is_active: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            is_active,
            created_at,
        }
    }

    /// Attach a password digest (builder style).
    pub fn with_password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark the account active. Persisting is up to the caller.
    pub fn activate(&mut self) {
        self.is_active = true;
    }

    /// Mark the account inactive. Persisting is up to the caller.
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email.masked())
            .field("password_hash", &"[REDACTED]")
            .field("is_active", &self.is_active)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_new_user_defaults() {
        let user = User::new("l9v3h@example.com").unwrap();
        assert_eq!(user.email().as_str(), "l9v3h@example.com");
        assert!(user.is_active());
        assert!(user.password_hash().is_empty());
        assert!(user.created_at() <= Utc::now());
    }

    #[test]
    fn test_new_user_rejects_malformed_email() {
        let err = User::new("not-an-email").unwrap_err();
        assert!(matches!(err, AppError::InvalidEmail(_)));
    }

    #[test]
    fn test_activate_and_deactivate() {
        let mut user = User::new("toggle@example.com").unwrap();
        user.deactivate();
        assert!(!user.is_active());
        user.activate();
        assert!(user.is_active());
    }

    #[test]
    fn test_equality_is_by_id() {
        let user = User::new("same@example.com").unwrap();
        let mut changed = user.clone().with_password_hash("abc");
        changed.deactivate();
        assert_eq!(user, changed);

        let other = User::new("same@example.com").unwrap();
        assert_ne!(user, other);

        let set: HashSet<User> = [user.clone(), changed, other].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_restore_keeps_identity() {
        let original = User::new("restore@example.com").unwrap().with_password_hash("h");
        let restored = User::restore(
            original.id(),
            original.email().clone(),
            original.password_hash().to_string(),
            false,
            original.created_at(),
        );
        assert_eq!(restored, original);
        assert!(!restored.is_active());
        assert_eq!(restored.password_hash(), "h");
    }

    #[test]
    fn test_serialization_hides_password_hash() {
        let user = User::new("json@example.com").unwrap().with_password_hash("secret-hash");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("json@example.com"));
        assert!(!json.contains("secret-hash"));
    }
}
