//! Sign-in and registration commands.

use clap::{Args, Subcommand};

use allora_app::{
    AppContext,
    auth::{SignInRequest, SignUpRequest},
};

use crate::errors::CliError;

#[derive(Debug, Args)]
pub struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
enum AuthSubcommand {
    /// Sign in; the session cookie lives for the rest of the invocation
    SignIn(SignInArgs),

    /// Register a new account
    SignUp(SignUpArgs),
}

#[derive(Debug, Args)]
struct SignInArgs {
    /// Account username
    #[arg(long)]
    username: String,

    /// Account password
    #[arg(long, env = "ALLORA_PASSWORD")]
    password: String,

    /// Completed captcha challenge token, forwarded to the backend
    #[arg(long, env = "ALLORA_RECAPTCHA_TOKEN", default_value = "")]
    recaptcha_token: String,
}

#[derive(Debug, Args)]
struct SignUpArgs {
    /// Desired username
    #[arg(long)]
    username: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// First name
    #[arg(long)]
    first_name: String,

    /// Last name
    #[arg(long)]
    last_name: String,

    /// Postal address
    #[arg(long)]
    address: String,

    /// Password
    #[arg(long, env = "ALLORA_PASSWORD")]
    password: String,

    /// Password, repeated
    #[arg(long)]
    confirm_password: String,

    /// Completed captcha challenge token, forwarded to the backend
    #[arg(long, env = "ALLORA_RECAPTCHA_TOKEN", default_value = "")]
    recaptcha_token: String,
}

pub(crate) async fn run(command: AuthCommand, context: &AppContext) -> Result<(), CliError> {
    match command.command {
        AuthSubcommand::SignIn(args) => sign_in(args, context).await,
        AuthSubcommand::SignUp(args) => sign_up(args, context).await,
    }
}

async fn sign_in(args: SignInArgs, context: &AppContext) -> Result<(), CliError> {
    context
        .auth
        .sign_in(SignInRequest {
            username: args.username.clone(),
            password: args.password,
            recaptcha_token: args.recaptcha_token,
        })
        .await?;

    println!("Signed in as {}.", args.username);

    Ok(())
}

async fn sign_up(args: SignUpArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context
        .auth
        .sign_up(SignUpRequest {
            username: args.username.clone(),
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name,
            address: args.address,
            password: args.password,
            confirm_password: args.confirm_password,
            recaptcha_token: args.recaptcha_token,
        })
        .await?;

    match envelope.body {
        Some(user) => println!("Account created for {} ({}).", user.username, user.email),
        None => println!("Account created for {}.", args.username),
    }

    Ok(())
}
