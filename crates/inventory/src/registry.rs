use std::collections::HashMap;

use stockroom_core::{InventoryError, InventoryResult, ProductId};
use stockroom_products::Product;

/// Mapping of product identity to current catalog/stock state, with a
/// case-folded SKU index enforcing SKU uniqueness.
///
/// Products are never removed; discontinuation is a flag, so the SKU index
/// covers every product ever added.
#[derive(Debug, Default)]
pub struct ProductRegistry {
    products: HashMap<ProductId, Product>,
    sku_index: HashMap<String, ProductId>,
}

impl ProductRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a validated product.
    ///
    /// Fails on a case-insensitive SKU collision; nothing is stored on
    /// failure.
    pub fn insert(&mut self, product: Product) -> InventoryResult<ProductId> {
        let key = sku_key(product.sku());
        if self.sku_index.contains_key(&key) {
            return Err(InventoryError::conflict(format!(
                "product with SKU '{}' already exists",
                product.sku()
            )));
        }

        let id = product.id();
        self.sku_index.insert(key, id);
        self.products.insert(id, product);
        Ok(id)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.get_mut(&id)
    }

    /// Case-insensitive exact SKU lookup. Empty or whitespace input matches
    /// nothing.
    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        if sku.trim().is_empty() {
            return None;
        }
        self.sku_index
            .get(&sku_key(sku))
            .and_then(|id| self.products.get(id))
    }

    /// All products, name-ascending. The SKU tie-break keeps the ordering
    /// deterministic for equal names.
    pub fn list(&self) -> Vec<&Product> {
        let mut items: Vec<&Product> = self.products.values().collect();
        sort_by_name(&mut items);
        items
    }

    /// Case-insensitive exact category match, name-sorted.
    pub fn list_by_category(&self, category: &str) -> InventoryResult<Vec<&Product>> {
        if category.trim().is_empty() {
            return Err(InventoryError::validation("category cannot be empty"));
        }

        let needle = category.to_lowercase();
        let mut items: Vec<&Product> = self
            .products
            .values()
            .filter(|p| p.category().to_lowercase() == needle)
            .collect();
        sort_by_name(&mut items);
        Ok(items)
    }

    /// Case-insensitive substring match on name, SKU, or category.
    ///
    /// An empty or whitespace term yields an empty result rather than an
    /// error.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        if term.trim().is_empty() {
            return Vec::new();
        }

        let needle = term.to_lowercase();
        let mut items: Vec<&Product> = self
            .products
            .values()
            .filter(|p| {
                p.name().to_lowercase().contains(&needle)
                    || p.sku().to_lowercase().contains(&needle)
                    || p.category().to_lowercase().contains(&needle)
            })
            .collect();
        sort_by_name(&mut items);
        items
    }

    /// Flag a product as discontinued. Idempotent; fails only when the id is
    /// unknown.
    pub fn discontinue(&mut self, id: ProductId) -> InventoryResult<()> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(InventoryError::NotFound(id))?;
        product.discontinue();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Read-only iteration in unspecified order; callers needing a stable
    /// order go through [`ProductRegistry::list`].
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

fn sku_key(sku: &str) -> String {
    sku.to_lowercase()
}

fn sort_by_name(items: &mut [&Product]) {
    items.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.sku().cmp(b.sku())));
}
