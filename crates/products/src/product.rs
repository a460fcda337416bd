use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{Entity, InventoryError, InventoryResult, Money, ProductId};

/// Input for creating a catalog product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub price: Money,
    pub quantity: i64,
    pub reorder_level: i64,
}

/// Entity: a catalog product with its current stock state.
///
/// Fields are private; every state change goes through an invariant-enforcing
/// method below, so the quantity in stock can never be observed negative.
/// Products are never removed — discontinuation is the terminal state for
/// restock eligibility, while the stock itself stays readable and sellable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    sku: String,
    category: String,
    price: Money,
    quantity_in_stock: i64,
    reorder_level: i64,
    created_at: DateTime<Utc>,
    last_restocked_at: Option<DateTime<Utc>>,
    discontinued: bool,
}

impl Product {
    /// Validate the input and create the product.
    ///
    /// A negative price is unrepresentable ([`Money`] wraps unsigned minor
    /// units), so only name, SKU, and quantity need checking here. SKU
    /// uniqueness is a registry-level concern: a single product cannot know
    /// its siblings.
    pub fn create(spec: NewProduct, at: DateTime<Utc>) -> InventoryResult<Self> {
        if spec.name.trim().is_empty() {
            return Err(InventoryError::validation("product name cannot be empty"));
        }
        if spec.sku.trim().is_empty() {
            return Err(InventoryError::validation("SKU cannot be empty"));
        }
        if spec.quantity < 0 {
            return Err(InventoryError::validation("quantity cannot be negative"));
        }

        Ok(Self {
            id: ProductId::new(),
            name: spec.name,
            sku: spec.sku,
            category: spec.category,
            price: spec.price,
            quantity_in_stock: spec.quantity,
            reorder_level: spec.reorder_level,
            created_at: at,
            last_restocked_at: None,
            discontinued: false,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn quantity_in_stock(&self) -> i64 {
        self.quantity_in_stock
    }

    pub fn reorder_level(&self) -> i64 {
        self.reorder_level
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_restocked_at(&self) -> Option<DateTime<Utc>> {
        self.last_restocked_at
    }

    pub fn is_discontinued(&self) -> bool {
        self.discontinued
    }

    /// A product needs reordering when stock is at or below the threshold
    /// and it has not been discontinued. Always derived, never stored.
    pub fn needs_reorder(&self) -> bool {
        self.quantity_in_stock <= self.reorder_level && !self.discontinued
    }

    /// Inventory value of what is currently on hand.
    pub fn stock_value(&self) -> Money {
        self.price.extend(self.quantity_in_stock)
    }

    /// Add received stock and stamp the restock time.
    ///
    /// Discontinued products cannot be restocked.
    pub fn restock(&mut self, quantity: i64, at: DateTime<Utc>) -> InventoryResult<()> {
        if quantity <= 0 {
            return Err(InventoryError::validation("restock quantity must be positive"));
        }
        if self.discontinued {
            return Err(InventoryError::conflict("cannot restock a discontinued product"));
        }

        self.quantity_in_stock += quantity;
        self.last_restocked_at = Some(at);
        Ok(())
    }

    /// Remove sold stock. Selling exactly the available quantity is allowed.
    pub fn deduct_sale(&mut self, quantity: i64) -> InventoryResult<()> {
        if quantity <= 0 {
            return Err(InventoryError::validation("sale quantity must be positive"));
        }
        if self.quantity_in_stock < quantity {
            return Err(InventoryError::insufficient_stock(
                quantity,
                self.quantity_in_stock,
            ));
        }

        self.quantity_in_stock -= quantity;
        Ok(())
    }

    /// Apply a signed stock correction.
    ///
    /// The whole adjustment is rejected if it would drive stock negative —
    /// no partial application.
    pub fn adjust(&mut self, delta: i64) -> InventoryResult<()> {
        if delta == 0 {
            return Err(InventoryError::validation("adjustment delta cannot be zero"));
        }

        let new_quantity = self.quantity_in_stock + delta;
        if new_quantity < 0 {
            return Err(InventoryError::insufficient_stock(
                -delta,
                self.quantity_in_stock,
            ));
        }

        self.quantity_in_stock = new_quantity;
        Ok(())
    }

    /// Mark the product discontinued. Idempotent.
    pub fn discontinue(&mut self) {
        self.discontinued = true;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
