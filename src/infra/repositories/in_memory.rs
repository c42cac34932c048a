//! In-memory user repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::{Email, User, UserId};
use crate::errors::{AppError, AppResult};

/// List-backed repository. Lookups are linear scans.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists(&self, email: &str) -> AppResult<bool> {
        let email = Email::normalize(email);
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email().as_str() == email))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let email = Email::normalize(email);
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email().as_str() == email).cloned())
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(id) = UserId::parse(id) else {
            return Ok(None);
        };
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        // Same guarantee a unique constraint gives the database store
        if users
            .iter()
            .any(|u| u.id() == user.id() || u.email() == user.email())
        {
            return Err(AppError::already_exists(user.email().as_str()));
        }

        tracing::debug!(user_id = %user.id(), "Stored user in memory");
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if users
            .iter()
            .any(|u| u.id() != user.id() && u.email() == user.email())
        {
            return Err(AppError::already_exists(user.email().as_str()));
        }

        let slot = users
            .iter_mut()
            .find(|u| u.id() == user.id())
            .ok_or(AppError::UserNotFound)?;
        *slot = user.clone();
        Ok(user)
    }
}
