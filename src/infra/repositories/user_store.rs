//! Database-backed user repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::UserRepository;
use crate::domain::{Email, User};
use crate::errors::{AppError, AppResult};

/// Repository persisting users through SeaORM.
///
/// Email uniqueness is enforced by the `users.email` unique index, which is
/// what protects concurrent registrations racing on the same address.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Map a write failure, turning unique violations into a domain conflict
fn map_write_error(err: DbErr, email: &Email) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::already_exists(email.as_str()),
        _ => AppError::from(err),
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn exists(&self, email: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(Email::normalize(email)))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(Email::normalize(email)))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(id) = Uuid::parse_str(id.trim()) else {
            return Ok(None);
        };

        let result = UserEntity::find()
            .filter(user::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Seq)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(User::try_from).collect()
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let model = ActiveModel::from(&user)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, user.email()))?;

        tracing::debug!(user_id = %model.id, "Inserted user row");
        User::try_from(model)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let existing = UserEntity::find()
            .filter(user::Column::Id.eq(user.id().as_uuid()))
            .one(&self.db)
            .await?
            .ok_or(AppError::UserNotFound)?;

        // seq, id and created_at are never rewritten
        let mut active: ActiveModel = existing.into();
        active.email = Set(user.email().as_str().to_string());
        active.password_hash = Set(user.password_hash().to_string());
        active.is_active = Set(user.is_active());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, user.email()))?;

        User::try_from(model)
    }
}
