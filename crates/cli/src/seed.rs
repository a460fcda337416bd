//! Demo catalog seeding.
//!
//! The core is in-memory only, so each CLI invocation starts from this
//! known catalog unless `--no-seed` is given.

use stockroom_core::Money;
use stockroom_inventory::InventoryService;
use stockroom_products::NewProduct;

pub fn demo_catalog(service: &mut InventoryService) {
    let items = [
        ("Wireless Mouse", "ELEC-001", "Electronics", 29_99_u64, 45, 10),
        ("USB-C Cable", "ELEC-002", "Electronics", 12_99, 5, 20),
        ("Office Chair", "FURN-001", "Furniture", 199_99, 12, 5),
    ];

    for (name, sku, category, cents, quantity, reorder_level) in items {
        if let Err(err) = service.add_product(NewProduct {
            name: name.to_string(),
            sku: sku.to_string(),
            category: category.to_string(),
            price: Money::from_minor_units(cents),
            quantity,
            reorder_level,
        }) {
            tracing::warn!("failed to seed '{name}': {err}");
        }
    }
}
