//! Domain layer - Core business entities and value objects
//!
//! Storage-agnostic types. Value objects validate on construction and
//! the `User` aggregate exposes its own behavior.

pub mod commands;
pub mod email;
pub mod password;
pub mod user;
pub mod user_id;

pub use commands::RegisterUserCommand;
pub use email::Email;
pub use password::Password;
pub use user::User;
pub use user_id::UserId;
