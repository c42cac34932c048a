//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use crate::domain::{Email, User, UserId};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Insertion sequence, assigned by the database
    #[sea_orm(primary_key)]
    pub seq: i32,
    #[sea_orm(unique)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity.
///
/// Fails only if the stored email no longer passes validation.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(User::restore(
            UserId::from(model.id),
            Email::parse(&model.email)?,
            model.password_hash,
            model.is_active,
            model.created_at,
        ))
    }
}

/// Convert domain entity to a fully populated active model
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            seq: NotSet,
            id: Set(user.id().as_uuid()),
            email: Set(user.email().as_str().to_string()),
            password_hash: Set(user.password_hash().to_string()),
            is_active: Set(user.is_active()),
            created_at: Set(user.created_at()),
        }
    }
}
