//! Product browsing commands.

use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use allora_app::{AppContext, domain::products::ProductFilterRequest};

use crate::{errors::CliError, output};

#[derive(Debug, Args)]
pub struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    /// List every product, stocked or not
    List(PageArgs),

    /// List products currently in stock
    InStock(InStockArgs),

    /// Filter products by name, facets and price range
    Filter(FilterArgs),
}

#[derive(Debug, Args)]
struct PageArgs {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    page: u32,
}

#[derive(Debug, Args)]
struct InStockArgs {
    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    page: u32,

    /// Page size
    #[arg(long, default_value_t = 9)]
    size: u32,
}

#[derive(Debug, Args)]
struct FilterArgs {
    /// Substring to match in product names
    #[arg(long, default_value = "")]
    name: String,

    /// Brand names to include
    #[arg(long = "brand")]
    brands: Vec<String>,

    /// Category names to include
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Size names to include
    #[arg(long = "size")]
    sizes: Vec<String>,

    /// Gender names to include
    #[arg(long = "gender")]
    genders: Vec<String>,

    /// Lower price bound
    #[arg(long)]
    min_price: Option<Decimal>,

    /// Upper price bound
    #[arg(long)]
    max_price: Option<Decimal>,

    /// Sort key understood by the backend (e.g. price-asc)
    #[arg(long, default_value = "")]
    sort: String,

    /// Zero-based page number
    #[arg(long, default_value_t = 0)]
    page: u32,
}

pub(crate) async fn run(command: ProductsCommand, context: &AppContext) -> Result<(), CliError> {
    match command.command {
        ProductsSubcommand::List(args) => list(args, context).await,
        ProductsSubcommand::InStock(args) => in_stock(args, context).await,
        ProductsSubcommand::Filter(args) => filter(args, context).await,
    }
}

async fn list(args: PageArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.products.all(args.page).await?;

    let Some(page) = envelope.body else {
        println!("No products found.");
        return Ok(());
    };

    println!("{}", output::products_table(&page.content));
    println!("{}", output::page_footer(&page));

    Ok(())
}

async fn in_stock(args: InStockArgs, context: &AppContext) -> Result<(), CliError> {
    let envelope = context.products.in_stock(args.page, args.size).await?;

    let Some(page) = envelope.body else {
        println!("No products found.");
        return Ok(());
    };

    println!("{}", output::products_table(&page.content));
    println!("{}", output::page_footer(&page));

    Ok(())
}

async fn filter(args: FilterArgs, context: &AppContext) -> Result<(), CliError> {
    let request = ProductFilterRequest {
        name: args.name,
        brands_ids: resolve_brands(context, &args.brands).await?,
        categories_ids: resolve_categories(context, &args.categories).await?,
        sizes_ids: resolve_sizes(context, &args.sizes).await?,
        genders_ids: resolve_genders(context, &args.genders).await?,
        min_price: args.min_price,
        max_price: args.max_price,
        sort: args.sort,
        page: args.page,
    };

    let envelope = context.products.filtered(request).await?;

    let Some(page) = envelope.body else {
        println!("No products matched the filter.");
        return Ok(());
    };

    println!("{}", output::products_table(&page.content));
    println!("{}", output::page_footer(&page));

    Ok(())
}

// The filter endpoint wants facet ids, but names are what people type.
// Brands and categories are paged; walk every page before resolving.
async fn resolve_brands(context: &AppContext, names: &[String]) -> Result<Vec<i64>, CliError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_name = FxHashMap::default();
    let mut page_number = 0;

    loop {
        let envelope = context.catalog.brands(page_number).await?;

        let Some(page) = envelope.body else { break };

        for brand in &page.content {
            by_name.insert(brand.name.to_lowercase(), brand.product_brand_id);
        }

        if !page.has_next() {
            break;
        }

        page_number = page_number.saturating_add(1);
    }

    lookup_all(&by_name, names, "brand")
}

async fn resolve_categories(context: &AppContext, names: &[String]) -> Result<Vec<i64>, CliError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut by_name = FxHashMap::default();
    let mut page_number = 0;

    loop {
        let envelope = context.catalog.categories(page_number).await?;

        let Some(page) = envelope.body else { break };

        for category in &page.content {
            by_name.insert(category.name.to_lowercase(), category.product_category_id);
        }

        if !page.has_next() {
            break;
        }

        page_number = page_number.saturating_add(1);
    }

    lookup_all(&by_name, names, "category")
}

async fn resolve_sizes(context: &AppContext, names: &[String]) -> Result<Vec<i64>, CliError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let envelope = context.catalog.sizes().await?;

    let by_name: FxHashMap<String, i64> = envelope
        .body
        .unwrap_or_default()
        .into_iter()
        .map(|size| (size.name.to_lowercase(), size.product_size_id))
        .collect();

    lookup_all(&by_name, names, "size")
}

async fn resolve_genders(context: &AppContext, names: &[String]) -> Result<Vec<i64>, CliError> {
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let envelope = context.catalog.genders().await?;

    let by_name: FxHashMap<String, i64> = envelope
        .body
        .unwrap_or_default()
        .into_iter()
        .map(|gender| (gender.name.to_lowercase(), gender.product_gender_id))
        .collect();

    lookup_all(&by_name, names, "gender")
}

fn lookup_all(
    by_name: &FxHashMap<String, i64>,
    names: &[String],
    facet: &str,
) -> Result<Vec<i64>, CliError> {
    names
        .iter()
        .map(|name| {
            by_name
                .get(&name.to_lowercase())
                .copied()
                .ok_or_else(|| CliError::invalid(format!("unknown {facet}: {name}")))
        })
        .collect()
}
