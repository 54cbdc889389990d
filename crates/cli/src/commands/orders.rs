//! Order history commands for the signed-in visitor.

use clap::{Args, Subcommand};

use allora_app::AppContext;

use crate::{errors::CliError, output};

#[derive(Debug, Args)]
pub struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List your past orders
    History(HistoryArgs),

    /// Restart payment for one of your pending orders
    Pay(PayArgs),
}

#[derive(Debug, Args)]
struct HistoryArgs {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    page: u32,
}

#[derive(Debug, Args)]
struct PayArgs {
    /// Order id
    #[arg(long)]
    order_id: i64,
}

pub(crate) async fn run(command: OrdersCommand, context: &AppContext) -> Result<(), CliError> {
    match command.command {
        OrdersSubcommand::History(args) => history(args, context).await,
        OrdersSubcommand::Pay(args) => pay(args, context).await,
    }
}

async fn history(args: HistoryArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.orders.authenticated_history(args.page).await?;

    let Some(page) = envelope.body else {
        println!("No orders found.");
        return Ok(());
    };

    if page.content.is_empty() {
        println!("No orders found.");
        return Ok(());
    }

    println!("{}", output::orders_table(&page.content));
    println!("{}", output::page_footer(&page));

    Ok(())
}

async fn pay(args: PayArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.orders.pay_pending(args.order_id).await?;

    if let Some(payment_url) = envelope.body {
        println!("Complete payment at: {payment_url}");
    } else {
        println!("Payment restarted.");
    }

    Ok(())
}
