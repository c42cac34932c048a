//! Commands module - CLI command implementations.

pub mod accounts;
pub mod migrate;
