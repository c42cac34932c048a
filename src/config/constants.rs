//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Storage
// =============================================================================

/// Default database connection URL (local SQLite file, created on demand)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

/// Default maximum size of the database connection pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 5;

/// Storage backend identifiers accepted by `STORAGE_BACKEND`
pub const STORAGE_MEMORY: &str = "memory";
pub const STORAGE_DATABASE: &str = "database";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Email format: `localpart@domain.tld`
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$";

/// Placeholder shown in masked emails
pub const EMAIL_MASK: &str = "***";
