//! Repository layer - Data access abstraction
//!
//! The `UserRepository` port has two interchangeable implementations:
//! an in-memory list and a SeaORM-backed store.

pub(crate) mod entities;
mod in_memory;
mod user_repository;
mod user_store;

pub use in_memory::InMemoryUserRepository;
pub use user_repository::UserRepository;
pub use user_store::UserStore;

// Export mock for unit tests
#[cfg(test)]
pub use user_repository::MockUserRepository;
