//! Local cart commands.
//!
//! Everything here except `add`'s stock lookup is purely local: the cart
//! lives in the visitor's cart file and the backend is not involved until
//! checkout.

use clap::{Args, Subcommand};

use allora::cart::{CartItem, CartStore};
use allora_app::{AppContext, domain::products::Product};

use crate::{errors::CliError, output};

/// Page size used while scanning the stocked catalog for one product.
const LOOKUP_PAGE_SIZE: u32 = 24;

#[derive(Debug, Args)]
pub struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add a product/size selection to the cart
    Add(AddArgs),

    /// Remove one product/size selection from the cart
    Remove(SelectionArgs),

    /// Set the quantity of a selection (zero removes it)
    SetQuantity(SetQuantityArgs),

    /// Show the cart contents and totals
    List,

    /// Remove everything from the cart
    Clear,
}

#[derive(Debug, Args)]
struct AddArgs {
    /// Product id
    #[arg(long)]
    product_id: i64,

    /// Size variant id
    #[arg(long)]
    size_id: i64,

    /// Quantity to add
    #[arg(long, default_value_t = 1)]
    quantity: u32,
}

#[derive(Debug, Args)]
struct SelectionArgs {
    /// Product id
    #[arg(long)]
    product_id: i64,

    /// Size variant id
    #[arg(long)]
    size_id: i64,
}

#[derive(Debug, Args)]
struct SetQuantityArgs {
    /// Product id
    #[arg(long)]
    product_id: i64,

    /// Size variant id
    #[arg(long)]
    size_id: i64,

    /// New quantity; zero removes the selection
    #[arg(long)]
    quantity: u32,
}

pub(crate) async fn run(
    command: CartCommand,
    context: &AppContext,
    cart: &CartStore,
) -> Result<(), CliError> {
    match command.command {
        CartSubcommand::Add(args) => add(args, context, cart).await,
        CartSubcommand::Remove(args) => remove(&args, cart),
        CartSubcommand::SetQuantity(args) => set_quantity(&args, cart),
        CartSubcommand::List => list(cart),
        CartSubcommand::Clear => clear(cart),
    }
}

async fn add(args: AddArgs, context: &AppContext, cart: &CartStore) -> Result<(), CliError> {
    if args.quantity == 0 {
        return Err(CliError::invalid("quantity must be at least 1"));
    }

    let product = find_stocked_product(context, args.product_id).await?;

    let size = product
        .sizes
        .iter()
        .find(|size| size.product_size_id == args.size_id)
        .ok_or_else(|| {
            CliError::invalid(format!(
                "product {} is not offered in size id {}",
                product.name, args.size_id
            ))
        })?;

    // Stock is tracked per product across all size variants, so the limit
    // is checked against the whole-product quantity already in the cart.
    let already_in_cart = cart.total_quantity_for_product(product.product_id);

    if already_in_cart.saturating_add(args.quantity) > product.stock {
        return Err(CliError::invalid(format!(
            "only {} of {} in stock ({} already in the cart)",
            product.stock, product.name, already_in_cart
        )));
    }

    cart.add_item(CartItem {
        product_id: product.product_id,
        product_size_id: size.product_size_id,
        name: product.name.clone(),
        price: product.price,
        quantity: args.quantity,
        product_size_name: size.name.clone(),
        product_gender_name: product.gender.name.clone(),
        product_category_name: product.category.name.clone(),
        product_brand_name: product.brand.name.clone(),
        image: product.primary_image_url().unwrap_or_default().to_string(),
    })?;

    println!(
        "Added {} x {} ({}) to the cart.",
        args.quantity, product.name, size.name
    );

    Ok(())
}

fn remove(args: &SelectionArgs, cart: &CartStore) -> Result<(), CliError> {
    cart.remove_item(args.product_id, args.size_id)?;

    println!("Removed the selection from the cart.");

    Ok(())
}

fn set_quantity(args: &SetQuantityArgs, cart: &CartStore) -> Result<(), CliError> {
    cart.update_item(args.product_id, args.size_id, args.quantity)?;

    if args.quantity == 0 {
        println!("Removed the selection from the cart.");
    } else {
        println!("Quantity set to {}.", args.quantity);
    }

    Ok(())
}

fn list(cart: &CartStore) -> Result<(), CliError> {
    let items = cart.all_items();

    if items.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    println!("{}", output::cart_table(&items));
    println!("{} item(s), total {}", cart.total_items(), cart.total_price());

    Ok(())
}

fn clear(cart: &CartStore) -> Result<(), CliError> {
    cart.clear()?;

    println!("Cart cleared.");

    Ok(())
}

// There is no by-id product endpoint; walk the stocked listing until the
// product turns up.
async fn find_stocked_product(context: &AppContext, product_id: i64) -> Result<Product, CliError> {
    let mut page_number = 0;

    loop {
        let envelope = context.products.in_stock(page_number, LOOKUP_PAGE_SIZE).await?;

        let Some(page) = envelope.body else { break };

        let has_next = page.has_next();

        if let Some(product) = page
            .content
            .into_iter()
            .find(|product| product.product_id == product_id)
        {
            return Ok(product);
        }

        if !has_next {
            break;
        }

        page_number = page_number.saturating_add(1);
    }

    Err(CliError::invalid(format!(
        "product {product_id} is not available in stock"
    )))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rust_decimal::dec;
    use testresult::TestResult;

    use allora::cart::MemoryStorage;
    use allora_app::domain::products::MockProductsService;

    use crate::test_helpers::{empty_context, envelope, product, single_page};

    use super::*;

    fn local_cart() -> CartStore {
        CartStore::new(Arc::new(MemoryStorage::new()))
    }

    fn context_with_stocked_product(product_id: i64, size_id: i64, stock: u32) -> allora_app::AppContext {
        let mut products = MockProductsService::new();

        products
            .expect_in_stock()
            .returning(move |_, _| Ok(envelope(single_page(vec![product(product_id, size_id, dec!(20.00), stock)]))));

        let mut context = empty_context();
        context.products = Arc::new(products);

        context
    }

    fn add_command(product_id: i64, size_id: i64, quantity: u32) -> CartCommand {
        CartCommand {
            command: CartSubcommand::Add(AddArgs {
                product_id,
                size_id,
                quantity,
            }),
        }
    }

    #[tokio::test]
    async fn add_snapshots_product_details_into_the_cart() -> TestResult {
        let context = context_with_stocked_product(1, 2, 5);
        let cart = local_cart();

        run(add_command(1, 2, 2), &context, &cart).await?;

        let items = cart.all_items();

        assert_eq!(items.len(), 1);

        let item = items.first().cloned().expect("cart should contain one item");

        assert_eq!(item.product_id, 1);
        assert_eq!(item.product_size_id, 2);
        assert_eq!(item.quantity, 2);
        assert_eq!(item.price, dec!(20.00));
        assert_eq!(item.product_brand_name, "Allora");

        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_quantities_beyond_stock_across_variants() -> TestResult {
        let context = context_with_stocked_product(1, 2, 3);
        let cart = local_cart();

        run(add_command(1, 2, 2), &context, &cart).await?;

        let result = run(add_command(1, 2, 2), &context, &cart).await;

        assert!(
            matches!(result, Err(CliError::Invalid(_))),
            "expected stock limit rejection, got {result:?}"
        );
        assert_eq!(cart.total_items(), 2, "cart must be unchanged");

        Ok(())
    }

    #[tokio::test]
    async fn add_rejects_sizes_the_product_does_not_offer() {
        let context = context_with_stocked_product(1, 2, 5);
        let cart = local_cart();

        let result = run(add_command(1, 99, 1), &context, &cart).await;

        assert!(
            matches!(result, Err(CliError::Invalid(_))),
            "expected unknown size rejection, got {result:?}"
        );
    }

    #[tokio::test]
    async fn add_rejects_products_not_in_stock() {
        let mut products = MockProductsService::new();

        products
            .expect_in_stock()
            .returning(|_, _| Ok(envelope(single_page(Vec::new()))));

        let mut context = empty_context();
        context.products = Arc::new(products);

        let cart = local_cart();

        let result = run(add_command(7, 1, 1), &context, &cart).await;

        assert!(
            matches!(result, Err(CliError::Invalid(_))),
            "expected missing product rejection, got {result:?}"
        );
    }

    #[tokio::test]
    async fn remove_and_clear_work_without_backend_calls() -> TestResult {
        let context = context_with_stocked_product(1, 2, 5);
        let cart = local_cart();

        run(add_command(1, 2, 1), &context, &cart).await?;

        // The remaining subcommands run against an expectation-free context;
        // any backend call would fail the test.
        let offline = empty_context();

        run(
            CartCommand {
                command: CartSubcommand::Remove(SelectionArgs {
                    product_id: 1,
                    size_id: 2,
                }),
            },
            &offline,
            &cart,
        )
        .await?;

        assert!(cart.all_items().is_empty());

        run(CartCommand { command: CartSubcommand::Clear }, &offline, &cart).await?;

        assert_eq!(cart.total_items(), 0);

        Ok(())
    }
}
