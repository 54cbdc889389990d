//! Allora Storefront CLI

use std::{process, sync::Arc};

use clap::{Parser, Subcommand};

use allora::cart::{CartStore, FileStorage};
use allora_app::{AppContext, client::ApiConfig};

use crate::{
    commands::{admin, ai, auth, cart, checkout, orders, password, products, profile},
    config::{BackendConfig, CartConfig, LoggingConfig},
    errors::CliError,
};

mod commands;
mod config;
mod errors;
mod logging;
mod output;

#[cfg(test)]
mod test_helpers;

#[derive(Debug, Parser)]
#[command(name = "allora", about = "Allora storefront terminal client", long_about = None)]
struct Cli {
    /// Backend connection settings.
    #[command(flatten)]
    backend: BackendConfig,

    /// Local cart persistence settings.
    #[command(flatten)]
    cart: CartConfig,

    /// Logging output settings.
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products(products::ProductsCommand),

    /// Manage the local shopping cart
    Cart(cart::CartCommand),

    /// Place an order from the cart contents
    Checkout(checkout::CheckoutArgs),

    /// View and pay your orders
    Orders(orders::OrdersCommand),

    /// Sign in or register
    Auth(auth::AuthCommand),

    /// Change or recover your password
    Password(password::PasswordCommand),

    /// View or update your personal details
    Profile(profile::ProfileCommand),

    /// Administrator operations
    Admin(admin::AdminCommand),

    /// Prompt the administrator AI assistant
    Ai(ai::AiArgs),
}

#[tokio::main]
async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        report(&error);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    logging::init(&cli.logging)?;

    tracing::debug!(api_url = %cli.backend.api_url, "starting storefront client");

    let context = AppContext::from_config(ApiConfig {
        base_url: cli.backend.api_url.clone(),
    })?;

    let cart_store = CartStore::new(Arc::new(FileStorage::new(cli.cart.cart_file.clone())));

    match cli.command {
        Commands::Products(command) => products::run(command, &context).await,
        Commands::Cart(command) => cart::run(command, &context, &cart_store).await,
        Commands::Checkout(args) => checkout::run(args, &context, &cart_store).await,
        Commands::Orders(command) => orders::run(command, &context).await,
        Commands::Auth(command) => auth::run(command, &context).await,
        Commands::Password(command) => password::run(command, &context).await,
        Commands::Profile(command) => profile::run(command, &context).await,
        Commands::Admin(command) => admin::run(command, &context).await,
        Commands::Ai(args) => ai::run(args, &context).await,
    }
}

// Validation failures get their field messages; everything else surfaces a
// single line, falling back to the generic message baked into ApiError.
fn report(error: &CliError) {
    eprintln!("{error}");

    if let CliError::Api(api_error) = error {
        if let Some(validation) = api_error.validation_errors() {
            for (field, message) in validation {
                eprintln!("  {field}: {message}");
            }
        }
    }
}
