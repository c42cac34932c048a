//! User repository port.

use async_trait::async_trait;

use crate::domain::User;
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

/// Storage contract for the `User` aggregate.
///
/// Email arguments are normalized by implementations, so lookups are
/// case-insensitive. Identifier arguments that are not UUIDs never match.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Whether a user with this email is stored
    async fn exists(&self, email: &str) -> AppResult<bool> {
        Ok(self.get_by_email(email).await?.is_some())
    }

    /// Find user by email address
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Find user by id (string form)
    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// All users in insertion order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Persist a new user and return the stored state
    async fn save(&self, user: User) -> AppResult<User>;

    /// Persist changes to an existing user
    async fn update(&self, user: User) -> AppResult<User>;
}
