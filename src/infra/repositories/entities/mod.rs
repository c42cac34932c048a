//! SeaORM entity definitions
//!
//! Storage records, kept apart from the domain types.

pub mod user;
