//! Account commands - Run the user use cases from the command line.

use serde::Serialize;

use crate::cli::args::{CredentialsArgs, UserIdArgs};
use crate::cli::Commands;
use crate::domain::{RegisterUserCommand, User};
use crate::errors::{AppError, AppResult};
use crate::services::ServiceContainer;

/// Execute an account command against the given services
pub async fn execute(command: Commands, services: &dyn ServiceContainer) -> AppResult<()> {
    let users = services.users();

    match command {
        Commands::Register(CredentialsArgs { email, password }) => {
            let user = users
                .register(RegisterUserCommand::new(email, password))
                .await?;
            print_json(&user)
        }
        Commands::Login(CredentialsArgs { email, password }) => {
            let user = users.authenticate(&email, &password).await?;
            print_json(&user)
        }
        Commands::List => {
            let all: Vec<User> = users.list_users().await?;
            tracing::debug!(count = all.len(), "Listed users");
            print_json(&all)
        }
        Commands::Show(UserIdArgs { id }) => print_json(&users.get_user(&id).await?),
        Commands::Activate(UserIdArgs { id }) => print_json(&users.activate_user(&id).await?),
        Commands::Deactivate(UserIdArgs { id }) => {
            print_json(&users.deactivate_user(&id).await?)
        }
        Commands::Migrate(_) => Err(AppError::internal(
            "migrate is not an account command",
        )),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to render output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
