//! User service - Registration, authentication and account state.
//!
//! Every use case runs inside exactly one unit-of-work scope and commits
//! it on success. Failures leave the scope to roll back on drop.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{password, Email, Password, RegisterUserCommand, User, UserId};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWorkFactory;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user with a unique email
    async fn register(&self, cmd: RegisterUserCommand) -> AppResult<User>;

    /// Check credentials and return the matching user.
    ///
    /// Unknown emails fail with `UserNotFound` and wrong passwords with
    /// `InvalidCredentials`, which lets callers tell the two apart.
    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User>;

    /// Get user by id
    async fn get_user(&self, id: &str) -> AppResult<User>;

    /// List all users in registration order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Mark a user active
    async fn activate_user(&self, id: &str) -> AppResult<User>;

    /// Mark a user inactive
    async fn deactivate_user(&self, id: &str) -> AppResult<User>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<F: UnitOfWorkFactory> {
    uow: Arc<F>,
    enforce_password_policy: bool,
}

impl<F: UnitOfWorkFactory> UserManager<F> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<F>, config: &Config) -> Self {
        Self {
            uow,
            enforce_password_policy: config.enforce_password_policy,
        }
    }

    async fn set_active(&self, id: &str, active: bool) -> AppResult<User> {
        let id = UserId::parse(id)?;
        let scope = self.uow.begin().await?;
        let users = scope.users();

        let mut user = users
            .get_by_id(&id.to_string())
            .await?
            .ok_or_user_not_found()?;
        if active {
            user.activate();
        } else {
            user.deactivate();
        }

        let user = users.update(user).await?;
        scope.commit().await?;

        tracing::info!(user_id = %user.id(), active, "User activation changed");
        Ok(user)
    }
}

#[async_trait]
impl<F: UnitOfWorkFactory> UserService for UserManager<F> {
    async fn register(&self, cmd: RegisterUserCommand) -> AppResult<User> {
        let email = Email::parse(&cmd.email)?;
        let password_hash = if self.enforce_password_policy {
            Password::parse(&cmd.password)?.digest()
        } else {
            password::digest(&cmd.password)
        };

        let scope = self.uow.begin().await?;
        let users = scope.users();

        // Not atomic with `save`; the store's unique email constraint
        // settles concurrent registrations.
        if users.exists(email.as_str()).await? {
            tracing::info!(email = %email.masked(), "Registration rejected: email taken");
            return Err(AppError::already_exists(email.as_str()));
        }

        let user = users
            .save(User::with_email(email).with_password_hash(password_hash))
            .await?;
        scope.commit().await?;

        tracing::info!(user_id = %user.id(), email = %user.email().masked(), "User registered");
        Ok(user)
    }

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User> {
        let scope = self.uow.begin().await?;

        let Some(user) = scope.users().get_by_email(email).await? else {
            tracing::warn!("Authentication failed: unknown email");
            return Err(AppError::UserNotFound);
        };

        if !password::verify(password, user.password_hash()) {
            tracing::warn!(user_id = %user.id(), "Authentication failed: wrong password");
            return Err(AppError::InvalidCredentials);
        }

        scope.commit().await?;
        tracing::debug!(user_id = %user.id(), "User authenticated");
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> AppResult<User> {
        let id = UserId::parse(id)?;
        let scope = self.uow.begin().await?;

        let user = scope
            .users()
            .get_by_id(&id.to_string())
            .await?
            .ok_or_user_not_found()?;
        scope.commit().await?;
        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        let scope = self.uow.begin().await?;
        let users = scope.users().list().await?;
        scope.commit().await?;
        Ok(users)
    }

    async fn activate_user(&self, id: &str) -> AppResult<User> {
        self.set_active(id, true).await
    }

    async fn deactivate_user(&self, id: &str) -> AppResult<User> {
        self.set_active(id, false).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockUserRepository, UnitOfWork, UserRepository};
    use mockall::predicate::eq;

    /// Test factory handing out units of work over one mock repository
    struct MockFactory {
        repo: Arc<MockUserRepository>,
    }

    struct MockUnitOfWork {
        repo: Arc<MockUserRepository>,
    }

    #[async_trait]
    impl UnitOfWork for MockUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.repo.clone()
        }

        async fn commit(&mut self) -> AppResult<()> {
            Ok(())
        }

        fn rollback(&mut self) {}
    }

    #[async_trait]
    impl UnitOfWorkFactory for MockFactory {
        type Uow = MockUnitOfWork;

        async fn create(&self) -> AppResult<Self::Uow> {
            Ok(MockUnitOfWork {
                repo: self.repo.clone(),
            })
        }
    }

    fn service(repo: MockUserRepository) -> UserManager<MockFactory> {
        let factory = MockFactory {
            repo: Arc::new(repo),
        };
        UserManager::new(Arc::new(factory), &Config::default())
    }

    #[tokio::test]
    async fn test_register_checks_normalized_email_before_saving() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists()
            .with(eq("new@example.com"))
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_save()
            .times(1)
            .returning(|user| Ok(user));

        let user = service(repo)
            .register(RegisterUserCommand::new(" New@Example.com ", "Str0ngPass!"))
            .await
            .unwrap();

        assert_eq!(user.email().as_str(), "new@example.com");
        assert_eq!(user.password_hash(), password::digest("Str0ngPass!"));
    }

    #[tokio::test]
    async fn test_register_existing_email_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists().returning(|_| Ok(true));
        repo.expect_save().never();

        let err = service(repo)
            .register(RegisterUserCommand::new("dup@example.com", "Str0ngPass!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UserAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_weak_password_without_touching_storage() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists().never();
        repo.expect_save().never();

        let err = service(repo)
            .register(RegisterUserCommand::new("weak@example.com", "secret"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidPassword(_)));
    }

    #[tokio::test]
    async fn test_register_rejects_malformed_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists().never();

        let err = service(repo)
            .register(RegisterUserCommand::new("nope", "Str0ngPass!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_register_propagates_storage_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists().returning(|_| Ok(false));
        repo.expect_save().returning(|_| {
            Err(AppError::Database(sea_orm::DbErr::Custom(
                "disk full".to_string(),
            )))
        });

        let err = service(repo)
            .register(RegisterUserCommand::new("io@example.com", "Str0ngPass!"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email().returning(|_| Ok(None));

        let err = service(repo)
            .authenticate("ghost@example.com", "whatever")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UserNotFound));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let stored = User::new("login@example.com")
            .unwrap()
            .with_password_hash(password::digest("Right0ne!"));

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_email()
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update().never();

        let err = service(repo)
            .authenticate("login@example.com", "Wr0ngOne!")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_get_user_rejects_malformed_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id().never();

        let err = service(repo).get_user("123").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_deactivate_persists_through_update() {
        let stored = User::new("active@example.com").unwrap();
        let id = stored.id().to_string();

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .with(eq(id.clone()))
            .returning(move |_| Ok(Some(stored.clone())));
        repo.expect_update()
            .withf(|user| !user.is_active())
            .times(1)
            .returning(|user| Ok(user));

        let user = service(repo).deactivate_user(&id).await.unwrap();
        assert!(!user.is_active());
    }
}
