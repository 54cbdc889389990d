//! Profile commands for the signed-in visitor.

use clap::{Args, Subcommand};

use allora_app::{AppContext, domain::users::UserPersonalInformationRequest};

use crate::errors::CliError;

#[derive(Debug, Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    command: ProfileSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProfileSubcommand {
    /// Show the signed-in account
    Show,

    /// Update the signed-in account's personal details
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// First name
    #[arg(long)]
    first_name: String,

    /// Last name
    #[arg(long)]
    last_name: String,

    /// Postal address
    #[arg(long)]
    address: String,
}

pub(crate) async fn run(command: ProfileCommand, context: &AppContext) -> Result<(), CliError> {
    match command.command {
        ProfileSubcommand::Show => show(context).await,
        ProfileSubcommand::Update(args) => update(args, context).await,
    }
}

async fn show(context: &AppContext) -> Result<(), CliError> {
    let envelope = context.users.authenticated().await?;

    let Some(user) = envelope.body else {
        return Err(CliError::invalid("the backend returned no account details"));
    };

    println!("Username: {}", user.username);
    println!("Email:    {}", user.email);
    println!("Name:     {}", user.user_personal_information.full_name());
    println!("Address:  {}", user.user_personal_information.address);

    if user.is_administrator {
        println!("Role:     administrator");
    }

    Ok(())
}

async fn update(args: UpdateArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context
        .users
        .update_personal_information(UserPersonalInformationRequest {
            first_name: args.first_name,
            last_name: args.last_name,
            address: args.address,
        })
        .await?;

    match envelope.body {
        Some(details) => println!("Profile updated for {}.", details.full_name()),
        None => println!("Profile updated."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use allora_app::domain::users::{MockUsersService, User, UserPersonalInformation};

    use crate::test_helpers::{empty_context, envelope};

    use super::*;

    fn account() -> User {
        User {
            user_id: 1,
            username: "demo".to_string(),
            email: "demo@example.com".to_string(),
            is_administrator: false,
            user_personal_information: UserPersonalInformation {
                user_personal_information_id: 10,
                first_name: "Demo".to_string(),
                last_name: "Visitor".to_string(),
                address: "1 Example Street".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn show_fetches_the_authenticated_account() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_authenticated()
            .once()
            .return_once(|| Ok(envelope(account())));

        let mut context = empty_context();
        context.users = Arc::new(users);

        run(ProfileCommand { command: ProfileSubcommand::Show }, &context).await?;

        Ok(())
    }

    #[tokio::test]
    async fn update_sends_the_new_details() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_update_personal_information()
            .once()
            .withf(|request| request.first_name == "New" && request.address == "2 Other Street")
            .return_once(|_| Ok(envelope(account().user_personal_information)));

        let mut context = empty_context();
        context.users = Arc::new(users);

        run(
            ProfileCommand {
                command: ProfileSubcommand::Update(UpdateArgs {
                    first_name: "New".to_string(),
                    last_name: "Name".to_string(),
                    address: "2 Other Street".to_string(),
                }),
            },
            &context,
        )
        .await?;

        Ok(())
    }
}
