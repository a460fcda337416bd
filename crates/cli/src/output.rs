//! Plain-text rendering of service results.
//!
//! Formatting lives here, validation does not: the service returns typed
//! values and errors, and this layer only decides how they look.

use stockroom_inventory::{InventorySummary, StockTransaction};
use stockroom_products::Product;

/// One product as a fixed-width table row.
pub fn product_line(product: &Product) -> String {
    let status = if product.is_discontinued() {
        " [DISCONTINUED]"
    } else if product.needs_reorder() {
        " [REORDER]"
    } else {
        ""
    };

    format!(
        "  {:<12} | {:<25} | {:<15} | ${:>9} | Stock: {:>4}{}",
        product.sku(),
        product.name(),
        product.category(),
        product.price().to_string(),
        product.quantity_in_stock(),
        status
    )
}

pub fn print_products(products: &[&Product]) {
    if products.is_empty() {
        println!("  (none)");
        return;
    }
    for product in products {
        println!("{}", product_line(product));
    }
}

/// One ledger entry as a history row.
pub fn transaction_line(tx: &StockTransaction) -> String {
    let sign = if tx.delta >= 0 { "+" } else { "" };
    format!(
        "  {} | {:<10} | {}{:>5} | {} | by {}",
        tx.occurred_at.format("%Y-%m-%d %H:%M"),
        tx.kind.to_string(),
        sign,
        tx.delta,
        tx.reason,
        tx.performed_by
    )
}

pub fn print_transactions(transactions: &[&StockTransaction]) {
    if transactions.is_empty() {
        println!("  No transactions recorded.");
        return;
    }
    for tx in transactions {
        println!("{}", transaction_line(tx));
    }
}

pub fn print_summary(summary: &InventorySummary) {
    println!("Inventory Summary:");
    println!("  Total products:           {}", summary.total_products);
    println!("  Total inventory value:    ${}", summary.total_value);
    println!("  Products needing reorder: {}", summary.products_needing_reorder);
    println!("  Discontinued products:    {}", summary.discontinued_products);
    println!("  Total transactions:       {}", summary.total_transactions);
}
