//! Black-box tests for the inventory service: the end-to-end flows a
//! presentation layer relies on.

use stockroom_core::{InventoryError, Money, ProductId};
use stockroom_inventory::{InventoryService, TransactionKind};
use stockroom_products::NewProduct;

fn new_product(name: &str, sku: &str, category: &str, price: &str, quantity: i64, reorder_level: i64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        price: price.parse::<Money>().unwrap(),
        quantity,
        reorder_level,
    }
}

#[test]
fn restock_increments_stock_and_extends_the_ledger() {
    let mut service = InventoryService::new();
    let id = service
        .add_product(new_product("Widget", "W-1", "Tools", "9.99", 10, 3))
        .unwrap()
        .id();

    let product = service.restock(id, 5, "alice").unwrap();
    assert_eq!(product.quantity_in_stock(), 15);
    assert!(product.last_restocked_at().is_some());

    let history = service.history_for(id);
    assert_eq!(history.len(), 2);
    // Most recent first: the +5 restock, then the +10 initial entry.
    assert_eq!(history[0].kind, TransactionKind::Restock);
    assert_eq!(history[0].delta, 5);
    assert_eq!(history[0].performed_by, "alice");
    assert_eq!(history[1].delta, 10);
    assert_eq!(history[1].reason, "Initial stock");
    assert_eq!(history[1].performed_by, "System");
}

#[test]
fn reorder_report_tracks_the_threshold() {
    let mut service = InventoryService::new();
    let id = service
        .add_product(new_product("Cable", "C-1", "Electronics", "12.99", 5, 10))
        .unwrap()
        .id();

    let report = service.reorder_report();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].id(), id);

    service.restock(id, 10, "x").unwrap();
    assert_eq!(service.find_product(id).unwrap().quantity_in_stock(), 15);
    assert!(service.reorder_report().is_empty());
}

#[test]
fn reorder_report_orders_most_urgent_first() {
    let mut service = InventoryService::new();
    service
        .add_product(new_product("Low", "L-1", "Misc", "1.00", 2, 10))
        .unwrap();
    service
        .add_product(new_product("Lower", "L-2", "Misc", "1.00", 1, 10))
        .unwrap();
    service
        .add_product(new_product("Fine", "F-1", "Misc", "1.00", 50, 10))
        .unwrap();

    let skus: Vec<String> = service
        .reorder_report()
        .iter()
        .map(|p| p.sku().to_string())
        .collect();
    assert_eq!(skus, vec!["L-2", "L-1"]);
}

#[test]
fn oversell_fails_without_touching_state() {
    let mut service = InventoryService::new();
    let id = service
        .add_product(new_product("Widget", "W-1", "Tools", "9.99", 5, 0))
        .unwrap()
        .id();

    let err = service.record_sale(id, 10, "x").unwrap_err();
    assert_eq!(
        err,
        InventoryError::InsufficientStock {
            requested: 10,
            available: 5
        }
    );
    assert!(err.to_string().contains("5"));

    assert_eq!(service.find_product(id).unwrap().quantity_in_stock(), 5);
    // Only the initial-stock entry; the failed sale appended nothing.
    assert_eq!(service.history_for(id).len(), 1);
}

#[test]
fn selling_out_exactly_is_allowed() {
    let mut service = InventoryService::new();
    let id = service
        .add_product(new_product("Widget", "W-1", "Tools", "9.99", 5, 0))
        .unwrap()
        .id();

    let product = service.record_sale(id, 5, "x").unwrap();
    assert_eq!(product.quantity_in_stock(), 0);

    let history = service.history_for(id);
    assert_eq!(history[0].kind, TransactionKind::Sale);
    assert_eq!(history[0].delta, -5);
}

#[test]
fn duplicate_sku_is_rejected_case_insensitively() {
    let mut service = InventoryService::new();
    service
        .add_product(new_product("Dup", "SKU1", "Misc", "1.00", 1, 0))
        .unwrap();

    let err = service
        .add_product(new_product("Other", "sku1", "Misc", "1.00", 1, 0))
        .unwrap_err();
    assert!(matches!(err, InventoryError::Conflict(_)));
    assert_eq!(service.list_products().len(), 1);
}

#[test]
fn discontinued_products_cannot_be_restocked() {
    let mut service = InventoryService::new();
    let id = service
        .add_product(new_product("Widget", "W-1", "Tools", "9.99", 5, 0))
        .unwrap()
        .id();

    service.discontinue(id).unwrap();
    // Idempotent: a second discontinuation is not an error.
    service.discontinue(id).unwrap();

    let err = service.restock(id, 1, "x").unwrap_err();
    assert!(matches!(err, InventoryError::Conflict(_)));
    assert_eq!(service.find_product(id).unwrap().quantity_in_stock(), 5);
}

#[test]
fn sales_and_adjustments_remain_permitted_on_discontinued_stock() {
    let mut service = InventoryService::new();
    let id = service
        .add_product(new_product("Widget", "W-1", "Tools", "9.99", 5, 0))
        .unwrap()
        .id();
    service.discontinue(id).unwrap();

    service.record_sale(id, 2, "x").unwrap();
    service.adjust_stock(id, -1, "Damaged in storage", "x").unwrap();
    assert_eq!(service.find_product(id).unwrap().quantity_in_stock(), 2);
}

#[test]
fn adjustments_carry_their_reason_and_sign() {
    let mut service = InventoryService::new();
    let id = service
        .add_product(new_product("Widget", "W-1", "Tools", "9.99", 5, 0))
        .unwrap()
        .id();

    service.adjust_stock(id, 3, "Customer return", "bob").unwrap();
    service.adjust_stock(id, -2, "Damaged in transit", "bob").unwrap();

    let history = service.history_for(id);
    assert_eq!(history[0].kind, TransactionKind::Adjustment);
    assert_eq!(history[0].delta, -2);
    assert_eq!(history[0].reason, "Damaged in transit");
    assert_eq!(history[1].delta, 3);
    assert_eq!(history[1].reason, "Customer return");

    let err = service.adjust_stock(id, -7, "Recount", "bob").unwrap_err();
    assert!(matches!(err, InventoryError::InsufficientStock { .. }));
    assert_eq!(service.find_product(id).unwrap().quantity_in_stock(), 6);
}

#[test]
fn lookup_and_search_behave_like_the_catalog_queries() {
    let mut service = InventoryService::new();
    service
        .add_product(new_product("Wireless Mouse", "ELEC-001", "Electronics", "29.99", 45, 10))
        .unwrap();
    service
        .add_product(new_product("Office Chair", "FURN-001", "Furniture", "199.99", 12, 5))
        .unwrap();

    assert_eq!(
        service.find_product_by_sku("elec-001").map(|p| p.name()),
        Some("Wireless Mouse")
    );
    assert!(service.find_product_by_sku(" ").is_none());
    assert!(service.find_product(ProductId::new()).is_none());

    let names: Vec<&str> = service.list_products().iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["Office Chair", "Wireless Mouse"]);

    let furniture = service.products_in_category("furniture").unwrap();
    assert_eq!(furniture.len(), 1);
    assert_eq!(furniture[0].sku(), "FURN-001");

    assert_eq!(service.search_products("chair").len(), 1);
    assert!(service.search_products("").is_empty());
}

#[test]
fn recent_transactions_span_all_products() {
    let mut service = InventoryService::new();
    let a = service
        .add_product(new_product("A", "A-1", "Misc", "1.00", 5, 0))
        .unwrap()
        .id();
    let b = service
        .add_product(new_product("B", "B-1", "Misc", "1.00", 5, 0))
        .unwrap()
        .id();
    service.record_sale(a, 1, "x").unwrap();
    service.record_sale(b, 2, "x").unwrap();

    let recent = service.recent_transactions(10);
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[0].delta, -2);
    assert_eq!(recent[1].delta, -1);

    assert_eq!(service.recent_transactions(2).len(), 2);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut service = InventoryService::new();
    let id = service
        .add_product(new_product("Widget", "W-1", "Tools", "9.99", 10, 3))
        .unwrap()
        .id();
    service.record_sale(id, 4, "alice").unwrap();

    let snapshot = service.snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["products"].as_array().unwrap().len(), 1);
    assert_eq!(json["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(json["products"][0]["sku"], "W-1");
    // Money serializes as exact minor units.
    assert_eq!(json["products"][0]["price"], 999);
    assert_eq!(json["transactions"][1]["kind"], "sale");
    assert!(json["exported_at"].is_string());
}
