use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::Money;
use stockroom_products::Product;

use crate::ledger::StockTransaction;

/// Aggregate inventory figures, derived on demand and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySummary {
    pub total_products: usize,
    /// Σ price × quantity across the catalog, in exact minor units.
    pub total_value: Money,
    pub products_needing_reorder: usize,
    pub discontinued_products: usize,
    pub total_transactions: usize,
}

/// Point-in-time export of the whole registry and ledger.
///
/// Producing a snapshot never mutates service state. Rendering (JSON or
/// otherwise) is the job of a dedicated external formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventorySnapshot {
    pub products: Vec<Product>,
    pub transactions: Vec<StockTransaction>,
    pub exported_at: DateTime<Utc>,
}
