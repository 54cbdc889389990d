//! Administrator commands.
//!
//! Every operation here requires an administrator session; the backend
//! enforces that, these commands only forward the calls.

use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use allora_app::{
    AppContext,
    domain::{
        orders::{OrderStatus, OrderUpdateRequest},
        products::{ImageUpload, ProductUpload},
        reviews::ReviewRequest,
    },
};

use crate::{errors::CliError, output};

#[derive(Debug, Args)]
pub struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminSubcommand {
    /// Create, update or delete products
    Product(ProductCommand),

    /// Inspect and manage every order
    Orders(AdminOrdersCommand),

    /// Inspect and manage accounts
    Users(UsersCommand),

    /// Inspect and manage reviews
    Reviews(ReviewsCommand),
}

#[derive(Debug, Args)]
struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Create a product
    Create(ProductArgs),

    /// Update an existing product
    Update(UpdateProductArgs),

    /// Delete a product
    Delete(IdArg),
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Product description
    #[arg(long, default_value = "")]
    description: String,

    /// Unit price
    #[arg(long)]
    price: Decimal,

    /// Stock across all sizes
    #[arg(long)]
    stock: u32,

    /// Size names offered (repeatable)
    #[arg(long = "size")]
    sizes: Vec<String>,

    /// Brand name
    #[arg(long)]
    brand: String,

    /// Gender name
    #[arg(long)]
    gender: String,

    /// Category name
    #[arg(long)]
    category: String,

    /// Image files to upload (repeatable)
    #[arg(long = "image")]
    images: Vec<PathBuf>,
}

#[derive(Debug, Args)]
struct UpdateProductArgs {
    /// Product id
    #[arg(long)]
    product_id: i64,

    #[command(flatten)]
    product: ProductArgs,
}

#[derive(Debug, Args)]
struct IdArg {
    /// Resource id
    #[arg(long)]
    id: i64,
}

#[derive(Debug, Args)]
struct PageArg {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    page: u32,
}

#[derive(Debug, Args)]
struct AdminOrdersCommand {
    #[command(subcommand)]
    command: AdminOrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum AdminOrdersSubcommand {
    /// List every order
    List(PageArg),

    /// Change an order's status
    SetStatus(SetStatusArgs),

    /// Delete an order
    Delete(IdArg),
}

#[derive(Debug, Args)]
struct SetStatusArgs {
    /// Order id
    #[arg(long)]
    order_id: i64,

    /// New status (pending, paid, delivered)
    #[arg(long)]
    status: String,
}

#[derive(Debug, Args)]
struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Debug, Subcommand)]
enum UsersSubcommand {
    /// List accounts
    List(PageArg),

    /// Delete an account
    Delete(IdArg),
}

#[derive(Debug, Args)]
struct ReviewsCommand {
    #[command(subcommand)]
    command: ReviewsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ReviewsSubcommand {
    /// List every review
    List(PageArg),

    /// Submit a review as the signed-in user
    Create(CreateReviewArgs),

    /// Delete a review
    Delete(IdArg),
}

#[derive(Debug, Args)]
struct CreateReviewArgs {
    /// Product id
    #[arg(long)]
    product_id: i64,

    /// Rating from 1 to 5
    #[arg(long)]
    rating: u8,

    /// Optional comment
    #[arg(long)]
    comment: Option<String>,
}

pub(crate) async fn run(command: AdminCommand, context: &AppContext) -> Result<(), CliError> {
    match command.command {
        AdminSubcommand::Product(product) => match product.command {
            ProductSubcommand::Create(args) => create_product(args, context).await,
            ProductSubcommand::Update(args) => update_product(args, context).await,
            ProductSubcommand::Delete(args) => delete_product(args, context).await,
        },
        AdminSubcommand::Orders(orders) => match orders.command {
            AdminOrdersSubcommand::List(args) => list_orders(args, context).await,
            AdminOrdersSubcommand::SetStatus(args) => set_order_status(args, context).await,
            AdminOrdersSubcommand::Delete(args) => delete_order(args, context).await,
        },
        AdminSubcommand::Users(users) => match users.command {
            UsersSubcommand::List(args) => list_users(args, context).await,
            UsersSubcommand::Delete(args) => delete_user(args, context).await,
        },
        AdminSubcommand::Reviews(reviews) => match reviews.command {
            ReviewsSubcommand::List(args) => list_reviews(args, context).await,
            ReviewsSubcommand::Create(args) => create_review(args, context).await,
            ReviewsSubcommand::Delete(args) => delete_review(args, context).await,
        },
    }
}

fn build_upload(args: ProductArgs) -> Result<ProductUpload, CliError> {
    let images = args
        .images
        .iter()
        .map(|path| read_image(path))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ProductUpload {
        name: args.name,
        description: args.description,
        price: args.price,
        stock: args.stock,
        sizes_names: args.sizes,
        brand_name: args.brand,
        gender_name: args.gender,
        category_name: args.category,
        images,
    })
}

fn read_image(path: &Path) -> Result<ImageUpload, CliError> {
    let bytes = std::fs::read(path)
        .map_err(|error| CliError::invalid(format!("cannot read {}: {error}", path.display())))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::invalid(format!("{} has no file name", path.display())))?;

    Ok(ImageUpload {
        content_type: content_type_for(&file_name),
        file_name,
        bytes,
    })
}

fn content_type_for(file_name: &str) -> String {
    let extension = Path::new(file_name)
        .extension()
        .map(|extension| extension.to_string_lossy().to_lowercase());

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
    .to_string()
}

fn parse_status(status: &str) -> Result<OrderStatus, CliError> {
    match status.to_lowercase().as_str() {
        "pending" => Ok(OrderStatus::Pending),
        "paid" => Ok(OrderStatus::Paid),
        "delivered" => Ok(OrderStatus::Delivered),
        other => Err(CliError::invalid(format!(
            "unknown status {other}; use pending, paid or delivered"
        ))),
    }
}

async fn create_product(args: ProductArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.products.create(build_upload(args)?).await?;

    match envelope.body {
        Some(product) => println!("Created product {} (id {}).", product.name, product.product_id),
        None => println!("Product created."),
    }

    Ok(())
}

async fn update_product(args: UpdateProductArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context
        .products
        .update(args.product_id, build_upload(args.product)?)
        .await?;

    match envelope.body {
        Some(product) => println!("Updated product {} (id {}).", product.name, product.product_id),
        None => println!("Product updated."),
    }

    Ok(())
}

async fn delete_product(args: IdArg, context: &AppContext) -> Result<(), CliError> {
    context.products.delete(args.id).await?;

    println!("Product {} deleted.", args.id);

    Ok(())
}

async fn list_orders(args: PageArg, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.orders.all(args.page).await?;

    let Some(page) = envelope.body else {
        println!("No orders found.");
        return Ok(());
    };

    println!("{}", output::orders_table(&page.content));
    println!("{}", output::page_footer(&page));

    Ok(())
}

async fn set_order_status(args: SetStatusArgs, context: &AppContext) -> Result<(), CliError> {
    let status = parse_status(&args.status)?;

    context
        .orders
        .update(args.order_id, OrderUpdateRequest { order_status: status })
        .await?;

    println!("Order {} is now {status}.", args.order_id);

    Ok(())
}

async fn delete_order(args: IdArg, context: &AppContext) -> Result<(), CliError> {
    context.orders.delete(args.id).await?;

    println!("Order {} deleted.", args.id);

    Ok(())
}

async fn list_users(args: PageArg, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.users.all(args.page).await?;

    let Some(page) = envelope.body else {
        println!("No users found.");
        return Ok(());
    };

    println!("{}", output::users_table(&page.content));
    println!("{}", output::page_footer(&page));

    Ok(())
}

async fn delete_user(args: IdArg, context: &AppContext) -> Result<(), CliError> {
    context.users.delete(args.id).await?;

    println!("User {} deleted.", args.id);

    Ok(())
}

async fn list_reviews(args: PageArg, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.reviews.all(args.page).await?;

    let Some(page) = envelope.body else {
        println!("No reviews found.");
        return Ok(());
    };

    println!("{}", output::reviews_table(&page.content));
    println!("{}", output::page_footer(&page));

    Ok(())
}

async fn create_review(args: CreateReviewArgs, context: &AppContext) -> Result<(), CliError> {
    if !(1..=5).contains(&args.rating) {
        return Err(CliError::invalid("rating must be between 1 and 5"));
    }

    context
        .reviews
        .create(ReviewRequest {
            product_id: args.product_id,
            rating: args.rating,
            comment: args.comment,
        })
        .await?;

    println!("Review submitted.");

    Ok(())
}

async fn delete_review(args: IdArg, context: &AppContext) -> Result<(), CliError> {
    context.reviews.delete(args.id).await?;

    println!("Review {} deleted.", args.id);

    Ok(())
}
