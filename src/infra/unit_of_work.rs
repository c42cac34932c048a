//! Unit of Work pattern implementation.
//!
//! A unit of work bounds one use case's interaction with persistence. It is
//! acquired through a [`UnitOfWorkFactory`] as a [`UnitOfWorkScope`], which
//! rolls back on every exit path unless `commit` succeeded first.
//!
//! Both backends shipped here have no multi-statement transactions, so
//! their commit and rollback are no-ops. A transactional backend only has
//! to implement the same two traits; services stay unchanged.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::repositories::{InMemoryUserRepository, UserRepository, UserStore};
use crate::errors::AppResult;

/// One logical operation's handle on persistence.
#[async_trait]
pub trait UnitOfWork: Send {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Make the work done through this unit durable
    async fn commit(&mut self) -> AppResult<()>;

    /// Discard uncommitted work. Called from `Drop`, so it must not block.
    fn rollback(&mut self);
}

/// Creates one [`UnitOfWork`] per use case.
#[async_trait]
pub trait UnitOfWorkFactory: Send + Sync {
    type Uow: UnitOfWork;

    /// Create a fresh unit of work
    async fn create(&self) -> AppResult<Self::Uow>;

    /// Create a unit of work wrapped in its rollback guard
    async fn begin(&self) -> AppResult<UnitOfWorkScope<Self::Uow>> {
        Ok(UnitOfWorkScope::new(self.create().await?))
    }
}

/// Scoped acquisition of a unit of work.
///
/// Dropping the scope without a successful [`commit`](Self::commit) calls
/// `rollback` on the underlying unit. Scopes do not nest.
pub struct UnitOfWorkScope<U: UnitOfWork> {
    uow: U,
    finished: bool,
}

impl<U: UnitOfWork> UnitOfWorkScope<U> {
    pub fn new(uow: U) -> Self {
        Self {
            uow,
            finished: false,
        }
    }

    /// Get user repository for this scope
    pub fn users(&self) -> Arc<dyn UserRepository> {
        self.uow.users()
    }

    /// Commit and close the scope. On failure the scope still rolls back.
    pub async fn commit(mut self) -> AppResult<()> {
        self.uow.commit().await?;
        self.finished = true;
        Ok(())
    }

    /// Roll back and close the scope explicitly.
    pub fn rollback(mut self) {
        self.uow.rollback();
        self.finished = true;
    }
}

impl<U: UnitOfWork> Drop for UnitOfWorkScope<U> {
    fn drop(&mut self) {
        if !self.finished {
            self.uow.rollback();
        }
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// Unit of work over a shared in-memory repository
pub struct InMemoryUnitOfWork {
    users: Arc<InMemoryUserRepository>,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    async fn commit(&mut self) -> AppResult<()> {
        tracing::trace!("In-memory commit (no-op)");
        Ok(())
    }

    fn rollback(&mut self) {
        tracing::trace!("In-memory rollback (no-op)");
    }
}

/// Hands out units of work that all see the same in-memory store
#[derive(Default)]
pub struct InMemoryUnitOfWorkFactory {
    users: Arc<InMemoryUserRepository>,
}

impl InMemoryUnitOfWorkFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a factory around an existing repository
    pub fn with_repository(users: Arc<InMemoryUserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UnitOfWorkFactory for InMemoryUnitOfWorkFactory {
    type Uow = InMemoryUnitOfWork;

    async fn create(&self) -> AppResult<Self::Uow> {
        Ok(InMemoryUnitOfWork {
            users: self.users.clone(),
        })
    }
}

// =============================================================================
// Database
// =============================================================================

/// Unit of work over the database store. Each repository call runs in
/// its own implicit statement transaction.
pub struct DatabaseUnitOfWork {
    users: Arc<UserStore>,
}

#[async_trait]
impl UnitOfWork for DatabaseUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    async fn commit(&mut self) -> AppResult<()> {
        tracing::trace!("Database commit (no-op)");
        Ok(())
    }

    fn rollback(&mut self) {
        tracing::trace!("Database rollback (no-op)");
    }
}

/// Concrete factory for the database backend
pub struct Persistence {
    user_repo: Arc<UserStore>,
}

impl Persistence {
    /// Create new factory over a database connection
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db));
        Self { user_repo }
    }
}

#[async_trait]
impl UnitOfWorkFactory for Persistence {
    type Uow = DatabaseUnitOfWork;

    async fn create(&self) -> AppResult<Self::Uow> {
        Ok(DatabaseUnitOfWork {
            users: self.user_repo.clone(),
        })
    }
}
