use chrono::Utc;

use stockroom_core::{InventoryError, InventoryResult, Money, ProductId};
use stockroom_products::{NewProduct, Product};

use crate::ledger::{StockTransaction, TransactionKind, TransactionLedger};
use crate::registry::ProductRegistry;
use crate::snapshot::{InventorySnapshot, InventorySummary};

/// Reason and performer recorded for the initial-stock entry at creation.
const INITIAL_STOCK_REASON: &str = "Initial stock";
const SYSTEM_ACTOR: &str = "System";

/// Orchestration layer over one [`ProductRegistry`] and one
/// [`TransactionLedger`].
///
/// All stock-changing entry points go through here. Each operation validates
/// fully, then applies the quantity change and the ledger append together;
/// a failure leaves both containers untouched. Mutations take `&mut self`,
/// so in-process exclusive access is enforced by the borrow checker; callers
/// exposing the service to concurrent use wrap it in their own mutual
/// exclusion.
#[derive(Debug, Default)]
pub struct InventoryService {
    registry: ProductRegistry,
    ledger: TransactionLedger,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a product and, when the starting quantity is positive, the
    /// matching initial-stock ledger entry.
    pub fn add_product(&mut self, spec: NewProduct) -> InventoryResult<&Product> {
        let product = Product::create(spec, Utc::now())?;
        let quantity = product.quantity_in_stock();
        let id = self.registry.insert(product)?;

        if quantity > 0 {
            self.ledger.record(
                id,
                TransactionKind::Restock,
                quantity,
                INITIAL_STOCK_REASON,
                SYSTEM_ACTOR,
            );
        }

        self.registry.get(id).ok_or(InventoryError::NotFound(id))
    }

    /// Receive stock: increment the quantity, stamp the restock time, and
    /// append a `Restock` entry with delta `+quantity`.
    pub fn restock(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        performed_by: &str,
    ) -> InventoryResult<&Product> {
        let product = self
            .registry
            .get_mut(product_id)
            .ok_or(InventoryError::NotFound(product_id))?;
        product.restock(quantity, Utc::now())?;

        self.ledger.record(
            product_id,
            TransactionKind::Restock,
            quantity,
            "Restock",
            performed_by,
        );
        self.registry
            .get(product_id)
            .ok_or(InventoryError::NotFound(product_id))
    }

    /// Record a sale: decrement the quantity and append a `Sale` entry with
    /// delta `-quantity`. Selling exactly the available quantity is allowed.
    pub fn record_sale(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        performed_by: &str,
    ) -> InventoryResult<&Product> {
        let product = self
            .registry
            .get_mut(product_id)
            .ok_or(InventoryError::NotFound(product_id))?;
        product.deduct_sale(quantity)?;

        self.ledger.record(
            product_id,
            TransactionKind::Sale,
            -quantity,
            "Sale",
            performed_by,
        );
        self.registry
            .get(product_id)
            .ok_or(InventoryError::NotFound(product_id))
    }

    /// Apply a signed correction and append an `Adjustment` entry carrying
    /// the delta as given. The reason text carries intent (return, damage,
    /// recount); the kind stays `Adjustment` regardless of sign.
    ///
    /// Permitted on discontinued products, matching sales.
    pub fn adjust_stock(
        &mut self,
        product_id: ProductId,
        delta: i64,
        reason: &str,
        performed_by: &str,
    ) -> InventoryResult<&Product> {
        let product = self
            .registry
            .get_mut(product_id)
            .ok_or(InventoryError::NotFound(product_id))?;
        product.adjust(delta)?;

        self.ledger.record(
            product_id,
            TransactionKind::Adjustment,
            delta,
            reason,
            performed_by,
        );
        self.registry
            .get(product_id)
            .ok_or(InventoryError::NotFound(product_id))
    }

    /// Discontinue a product. Idempotent; no quantity change, no ledger
    /// entry, and no reorder-level check.
    pub fn discontinue(&mut self, product_id: ProductId) -> InventoryResult<()> {
        self.registry.discontinue(product_id)
    }

    /// Products at or below their reorder threshold, most urgent (lowest
    /// stock) first. Name tie-break keeps the order deterministic.
    pub fn reorder_report(&self) -> Vec<&Product> {
        let mut items: Vec<&Product> = self
            .registry
            .iter()
            .filter(|p| p.needs_reorder())
            .collect();
        items.sort_by(|a, b| {
            a.quantity_in_stock()
                .cmp(&b.quantity_in_stock())
                .then_with(|| a.name().cmp(b.name()))
        });
        items
    }

    /// Aggregate view, computed fresh on every call.
    pub fn summary(&self) -> InventorySummary {
        let mut total_value = Money::ZERO;
        let mut needing_reorder = 0;
        let mut discontinued = 0;

        for product in self.registry.iter() {
            total_value = total_value.saturating_add(product.stock_value());
            if product.needs_reorder() {
                needing_reorder += 1;
            }
            if product.is_discontinued() {
                discontinued += 1;
            }
        }

        InventorySummary {
            total_products: self.registry.len(),
            total_value,
            products_needing_reorder: needing_reorder,
            discontinued_products: discontinued,
            total_transactions: self.ledger.len(),
        }
    }

    /// Read-only snapshot of both collections for external serialization.
    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            products: self.registry.list().into_iter().cloned().collect(),
            transactions: self.ledger.iter().cloned().collect(),
            exported_at: Utc::now(),
        }
    }

    // Read-only pass-throughs consumed by the presentation layer.

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.registry.get(id)
    }

    pub fn find_product_by_sku(&self, sku: &str) -> Option<&Product> {
        self.registry.find_by_sku(sku)
    }

    pub fn list_products(&self) -> Vec<&Product> {
        self.registry.list()
    }

    pub fn products_in_category(&self, category: &str) -> InventoryResult<Vec<&Product>> {
        self.registry.list_by_category(category)
    }

    pub fn search_products(&self, term: &str) -> Vec<&Product> {
        self.registry.search(term)
    }

    pub fn history_for(&self, product_id: ProductId) -> Vec<&StockTransaction> {
        self.ledger.history_for(product_id)
    }

    pub fn recent_transactions(&self, count: usize) -> Vec<&StockTransaction> {
        self.ledger.recent(count)
    }
}
