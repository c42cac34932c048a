//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::StorageBackend;

/// User accounts - register and authenticate users
#[derive(Parser, Debug)]
#[command(name = "user-accounts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storage backend (overrides STORAGE_BACKEND)
    #[arg(long, global = true, value_enum)]
    pub storage: Option<StorageArg>,

    /// Database URL (overrides DATABASE_URL)
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Storage backend choices on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageArg {
    Memory,
    Database,
}

impl From<StorageArg> for StorageBackend {
    fn from(arg: StorageArg) -> Self {
        match arg {
            StorageArg::Memory => StorageBackend::Memory,
            StorageArg::Database => StorageBackend::Database,
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new user
    Register(CredentialsArgs),

    /// Check a user's credentials
    Login(CredentialsArgs),

    /// List all users
    List,

    /// Show a single user
    Show(UserIdArgs),

    /// Activate a user
    Activate(UserIdArgs),

    /// Deactivate a user
    Deactivate(UserIdArgs),

    /// Run database migrations
    Migrate(MigrateArgs),
}

/// Email and password pair
#[derive(Args)]
pub struct CredentialsArgs {
    /// Account email address
    #[arg(short, long)]
    pub email: String,

    /// Account password
    #[arg(short, long, env = "USER_PASSWORD", hide_env_values = true)]
    pub password: String,
}

// Keep the password out of debug output
impl std::fmt::Debug for CredentialsArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsArgs")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A single user id
#[derive(Args, Debug)]
pub struct UserIdArgs {
    /// User id (UUID)
    pub id: String,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_register() {
        let cli = Cli::try_parse_from([
            "user-accounts",
            "--storage",
            "memory",
            "register",
            "--email",
            "a@example.com",
            "--password",
            "Str0ngPass!",
        ])
        .unwrap();

        assert_eq!(cli.storage, Some(StorageArg::Memory));
        match cli.command {
            Commands::Register(args) => assert_eq!(args.email, "a@example.com"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_migrate_status() {
        let cli = Cli::try_parse_from(["user-accounts", "migrate", "status"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Migrate(MigrateArgs {
                action: MigrateAction::Status
            })
        ));
    }

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
