//! Checkout command.

use clap::Args;

use allora::cart::CartStore;
use allora_app::{AppContext, domain::orders::OrderRequest};

use crate::errors::CliError;

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Keep the cart contents after the order is placed
    #[arg(long, default_value_t = false)]
    keep_cart: bool,
}

/// Translate the cart into an order request and place it. On success the
/// backend answers with a payment redirect URL and the cart is cleared
/// (unless `--keep-cart` was given).
pub(crate) async fn run(
    args: CheckoutArgs,
    context: &AppContext,
    cart: &CartStore,
) -> Result<(), CliError> {
    let items = cart.all_items();

    if items.is_empty() {
        return Err(CliError::invalid("the cart is empty; nothing to order"));
    }

    let request = OrderRequest::from_cart_items(&items);
    let envelope = context.orders.place(request).await?;

    if let Some(payment_url) = envelope.body {
        println!("Order placed. Complete payment at: {payment_url}");
    } else {
        println!("Order placed.");
    }

    if !args.keep_cart {
        cart.clear()?;
    }

    Ok(())
}
