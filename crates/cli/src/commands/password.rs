//! Password management and recovery commands.

use clap::{Args, Subcommand};

use allora_app::{
    AppContext,
    domain::users::{PasswordChangeRequest, PasswordResetRequest, PasswordResetTokenRequest},
};

use crate::errors::CliError;

#[derive(Debug, Args)]
pub struct PasswordCommand {
    #[command(subcommand)]
    command: PasswordSubcommand,
}

#[derive(Debug, Subcommand)]
enum PasswordSubcommand {
    /// Change the signed-in account's password
    Change(ChangeArgs),

    /// Email a password reset code to an address
    RequestReset(RequestResetArgs),

    /// Redeem a reset code and set a new password
    Reset(ResetArgs),
}

#[derive(Debug, Args)]
struct ChangeArgs {
    /// Current password
    #[arg(long)]
    current_password: String,

    /// New password
    #[arg(long)]
    new_password: String,

    /// New password, repeated
    #[arg(long)]
    confirm_new_password: String,
}

#[derive(Debug, Args)]
struct RequestResetArgs {
    /// Account email address
    #[arg(long)]
    email: String,

    /// Completed captcha challenge token, forwarded to the backend
    #[arg(long, env = "ALLORA_RECAPTCHA_TOKEN", default_value = "")]
    recaptcha_token: String,
}

#[derive(Debug, Args)]
struct ResetArgs {
    /// Account email address
    #[arg(long)]
    email: String,

    /// Reset code received by email
    #[arg(long)]
    code: String,

    /// New password
    #[arg(long)]
    new_password: String,

    /// New password, repeated
    #[arg(long)]
    confirm_new_password: String,

    /// Completed captcha challenge token, forwarded to the backend
    #[arg(long, env = "ALLORA_RECAPTCHA_TOKEN", default_value = "")]
    recaptcha_token: String,
}

pub(crate) async fn run(command: PasswordCommand, context: &AppContext) -> Result<(), CliError> {
    match command.command {
        PasswordSubcommand::Change(args) => change(args, context).await,
        PasswordSubcommand::RequestReset(args) => request_reset(args, context).await,
        PasswordSubcommand::Reset(args) => reset(args, context).await,
    }
}

async fn change(args: ChangeArgs, context: &AppContext) -> Result<(), CliError> {
    context
        .users
        .change_password(PasswordChangeRequest {
            current_password: args.current_password,
            new_password: args.new_password,
            confirm_new_password: args.confirm_new_password,
        })
        .await?;

    println!("Password changed.");

    Ok(())
}

async fn request_reset(args: RequestResetArgs, context: &AppContext) -> Result<(), CliError> {
    context
        .users
        .request_password_reset_code(PasswordResetTokenRequest {
            email: args.email.clone(),
            recaptcha_token: args.recaptcha_token,
        })
        .await?;

    println!("If {} has an account, a reset code is on its way.", args.email);

    Ok(())
}

async fn reset(args: ResetArgs, context: &AppContext) -> Result<(), CliError> {
    context
        .users
        .reset_password(PasswordResetRequest {
            email: args.email,
            reset_password_code: args.code,
            new_password: args.new_password,
            confirm_new_password: args.confirm_new_password,
            recaptcha_token: args.recaptcha_token,
        })
        .await?;

    println!("Password reset. You can sign in with the new password.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use allora_app::domain::users::MockUsersService;

    use crate::test_helpers::{empty_context, envelope};

    use super::*;

    #[tokio::test]
    async fn reset_sends_the_code_and_both_passwords() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_reset_password()
            .once()
            .withf(|request| {
                request.email == "visitor@example.com"
                    && request.reset_password_code == "123456"
                    && request.new_password == request.confirm_new_password
            })
            .return_once(|_| Ok(envelope(())));

        let mut context = empty_context();
        context.users = Arc::new(users);

        run(
            PasswordCommand {
                command: PasswordSubcommand::Reset(ResetArgs {
                    email: "visitor@example.com".to_string(),
                    code: "123456".to_string(),
                    new_password: "new-password".to_string(),
                    confirm_new_password: "new-password".to_string(),
                    recaptcha_token: String::new(),
                }),
            },
            &context,
        )
        .await?;

        Ok(())
    }
}
