//! User accounts - Application entry point
//!
//! CLI-based entry point that dispatches to the account and migration commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_accounts::{
    cli::{Cli, Commands},
    commands,
    config::Config,
    errors::AppResult,
    services::Services,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    // Load configuration, command-line flags win over the environment
    let mut config = Config::from_env()?;
    if let Some(storage) = cli.storage {
        config.storage = storage.into();
    }
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args, &config).await,
        command => {
            let services = Services::from_config(&config).await?;
            commands::accounts::execute(command, &services).await
        }
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
