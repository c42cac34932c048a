//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `register` / `login` - The two account use cases
//! - `list` / `show` / `activate` / `deactivate` - Account administration
//! - `migrate` - Database migrations

pub mod args;

pub use args::{Cli, Commands};
