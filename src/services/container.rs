//! Service Container - Wires the user service to a storage backend.
//!
//! The backend is chosen once, at construction; services only ever see
//! the `UnitOfWorkFactory` they were built with.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{UserManager, UserService};
use crate::config::{Config, StorageBackend};
use crate::errors::AppResult;
use crate::infra::{Database, InMemoryUnitOfWorkFactory, Persistence};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container around an existing service
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Services backed by a fresh in-memory store
    pub fn in_memory(config: &Config) -> Self {
        let uow = Arc::new(InMemoryUnitOfWorkFactory::new());
        Self::new(Arc::new(UserManager::new(uow, config)))
    }

    /// Services backed by the database behind `db`
    pub fn from_connection(db: DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        Self::new(Arc::new(UserManager::new(uow, config)))
    }

    /// Build services for the backend selected in `config`.
    ///
    /// The database backend connects and applies pending migrations first.
    pub async fn from_config(config: &Config) -> AppResult<Self> {
        tracing::debug!(storage = %config.storage, "Building services");

        match config.storage {
            StorageBackend::Memory => Ok(Self::in_memory(config)),
            StorageBackend::Database => {
                let db = Database::connect(config).await?;
                Ok(Self::from_connection(db.get_connection(), config))
            }
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
