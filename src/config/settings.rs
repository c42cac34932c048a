//! Application settings loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, STORAGE_DATABASE, STORAGE_MEMORY,
};
use crate::errors::AppError;

/// Which repository implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Database,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            STORAGE_MEMORY => Ok(StorageBackend::Memory),
            STORAGE_DATABASE => Ok(StorageBackend::Database),
            other => Err(AppError::invalid_argument(format!(
                "unknown storage backend '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "{}", STORAGE_MEMORY),
            StorageBackend::Database => write!(f, "{}", STORAGE_DATABASE),
        }
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub database_url: String,
    pub database_max_connections: u32,
    pub enforce_password_policy: bool,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("storage", &self.storage)
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("enforce_password_policy", &self.enforce_password_policy)
            .finish()
    }
}

/// In-memory preset used by tests and embedding callers. `from_env`
/// defaults to the database backend instead.
impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageBackend::Memory,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            enforce_password_policy: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to their defaults, except
    /// `STORAGE_BACKEND`, which must name a known backend.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let storage = match env::var("STORAGE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => StorageBackend::Database,
        };

        Ok(Self {
            storage,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            database_max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS),
            enforce_password_policy: env::var("ENFORCE_PASSWORD_POLICY")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        })
    }

    /// Configuration for an in-memory SQLite database (single connection).
    pub fn sqlite_memory() -> Self {
        Self {
            storage: StorageBackend::Database,
            database_url: "sqlite::memory:".to_string(),
            database_max_connections: 1,
            ..Self::default()
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parse() {
        assert_eq!("memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
        assert_eq!(" Database ".parse::<StorageBackend>().unwrap(), StorageBackend::Database);
        assert!("redis".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_default_is_in_memory_preset() {
        let config = Config::default();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.enforce_password_policy);
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config {
            database_url: "postgres://admin:hunter2@db/users".to_string(),
            ..Config::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
