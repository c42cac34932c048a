//! User accounts - registration and authentication over swappable storage
//!
//! A small domain/ports crate: self-validating value objects, a `User`
//! aggregate, a repository port with in-memory and database
//! implementations, a unit of work scoping each use case, and a service
//! implementing the use cases.
//!
//! # Architecture Layers
//!
//! - **domain**: Value objects, the `User` entity and input commands
//! - **infra**: Repositories, unit of work, database and migrations
//! - **services**: Use cases and the service container
//! - **config**: Application configuration and constants
//! - **cli** / **commands**: Command-line interface
//! - **errors**: Centralized error handling
//!
//! # Example
//!
//! ```no_run
//! use user_accounts::{Config, RegisterUserCommand, ServiceContainer, Services, UserService};
//!
//! # async fn demo() -> user_accounts::AppResult<()> {
//! let services = Services::in_memory(&Config::default());
//! let user = services
//!     .users()
//!     .register(RegisterUserCommand::new("john@example.com", "Str0ngPass!"))
//!     .await?;
//! let same = services.users().authenticate("john@example.com", "Str0ngPass!").await?;
//! assert_eq!(user, same);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Email, Password, RegisterUserCommand, User, UserId};
pub use errors::{AppError, AppResult};
pub use services::{ServiceContainer, Services, UserService};
