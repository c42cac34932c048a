//! Infrastructure layer - Storage integration
//!
//! - Database connection and migrations
//! - Repositories (in-memory and database)
//! - Unit of Work for scoping each use case

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{InMemoryUserRepository, UserRepository, UserStore};
pub use unit_of_work::{
    DatabaseUnitOfWork, InMemoryUnitOfWork, InMemoryUnitOfWorkFactory, Persistence, UnitOfWork,
    UnitOfWorkFactory, UnitOfWorkScope,
};

#[cfg(test)]
pub use repositories::MockUserRepository;
