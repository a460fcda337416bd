mod output;
mod seed;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use stockroom_core::{Money, ProductId};
use stockroom_inventory::InventoryService;
use stockroom_products::NewProduct;

#[derive(Parser, Debug)]
#[command(
    name = "stockroom",
    version,
    about = "Single-operator inventory and stock ledger"
)]
struct Cli {
    /// Label recorded as the performer of stock mutations.
    #[arg(long, global = true, default_value = "cli")]
    performed_by: String,

    /// Start with an empty catalog instead of the demo seed data.
    #[arg(long, global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List all products, optionally restricted to one category.
    List { category: Option<String> },
    /// Add a new product to the catalog.
    Add {
        name: String,
        sku: String,
        category: String,
        /// Unit price as a decimal amount, e.g. 29.99.
        price: String,
        quantity: i64,
        reorder_level: i64,
    },
    /// Search products by name, SKU, or category.
    Search { term: String },
    /// Receive stock for a product.
    Restock { sku: String, quantity: i64 },
    /// Record a sale.
    Sale { sku: String, quantity: i64 },
    /// Apply a signed stock correction with a reason.
    Adjust {
        sku: String,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
        reason: String,
    },
    /// Discontinue a product (stock stays readable; restock is blocked).
    Discontinue { sku: String },
    /// Show products needing reorder, most urgent first.
    Reorder,
    /// Show transaction history for a product, most recent first.
    History { sku: String },
    /// Show the most recent transactions across all products.
    Recent {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Show aggregate inventory figures.
    Summary,
    /// Export the catalog and ledger as JSON.
    Export,
}

fn main() {
    stockroom_observability::init();

    let cli = Cli::parse();

    let mut service = InventoryService::new();
    if !cli.no_seed {
        seed::demo_catalog(&mut service);
    }

    if let Err(err) = run(cli, &mut service) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, service: &mut InventoryService) -> Result<()> {
    let performed_by = cli.performed_by;

    match cli.command {
        Commands::List { category } => match category {
            Some(category) => {
                println!("Products in category '{category}':\n");
                output::print_products(&service.products_in_category(&category)?);
            }
            None => {
                println!("All products:\n");
                output::print_products(&service.list_products());
            }
        },
        Commands::Add {
            name,
            sku,
            category,
            price,
            quantity,
            reorder_level,
        } => {
            let price: Money = price.parse()?;
            let product = service.add_product(NewProduct {
                name,
                sku,
                category,
                price,
                quantity,
                reorder_level,
            })?;
            println!("Added product: {} (SKU: {})", product.name(), product.sku());
            tracing::info!(sku = product.sku(), "product added");
        }
        Commands::Search { term } => {
            println!("Search results for '{term}':\n");
            output::print_products(&service.search_products(&term));
        }
        Commands::Restock { sku, quantity } => {
            let id = resolve_sku(service, &sku)?;
            let product = service.restock(id, quantity, &performed_by)?;
            println!(
                "Restocked {} units of {}. New stock: {}",
                quantity,
                product.name(),
                product.quantity_in_stock()
            );
            tracing::info!(%sku, quantity, "restock recorded");
        }
        Commands::Sale { sku, quantity } => {
            let id = resolve_sku(service, &sku)?;
            let product = service.record_sale(id, quantity, &performed_by)?;
            println!(
                "Recorded sale of {} units of {}. Remaining stock: {}",
                quantity,
                product.name(),
                product.quantity_in_stock()
            );
            tracing::info!(%sku, quantity, "sale recorded");
        }
        Commands::Adjust { sku, delta, reason } => {
            let id = resolve_sku(service, &sku)?;
            let product = service.adjust_stock(id, delta, &reason, &performed_by)?;
            println!(
                "Adjusted {} by {}. New stock: {}",
                product.name(),
                delta,
                product.quantity_in_stock()
            );
            tracing::info!(%sku, delta, "adjustment recorded");
        }
        Commands::Discontinue { sku } => {
            let id = resolve_sku(service, &sku)?;
            service.discontinue(id)?;
            if let Some(product) = service.find_product(id) {
                println!("Discontinued {} (SKU: {})", product.name(), product.sku());
            }
            tracing::info!(%sku, "product discontinued");
        }
        Commands::Reorder => {
            println!("Products needing reorder:\n");
            let report = service.reorder_report();
            if report.is_empty() {
                println!("  No products need reordering.");
            } else {
                output::print_products(&report);
            }
        }
        Commands::History { sku } => {
            let product = service
                .find_product_by_sku(&sku)
                .ok_or_else(|| anyhow!("product with SKU '{sku}' not found"))?;
            println!(
                "Transaction history for {} (SKU: {}):\n",
                product.name(),
                product.sku()
            );
            let id = product.id();
            output::print_transactions(&service.history_for(id));
        }
        Commands::Recent { count } => {
            println!("Recent transactions:\n");
            output::print_transactions(&service.recent_transactions(count));
        }
        Commands::Summary => {
            output::print_summary(&service.summary());
        }
        Commands::Export => {
            println!("{}", serde_json::to_string_pretty(&service.snapshot())?);
        }
    }

    Ok(())
}

fn resolve_sku(service: &InventoryService, sku: &str) -> Result<ProductId> {
    service
        .find_product_by_sku(sku)
        .map(|product| product.id())
        .ok_or_else(|| anyhow!("product with SKU '{sku}' not found"))
}
