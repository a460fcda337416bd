//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// conflicts, stock shortfalls). Presentation concerns belong elsewhere.
/// All failures are synchronous and caller-correctable; nothing here is
/// retried automatically.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A value failed validation (e.g. malformed or empty input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The referenced product does not exist.
    #[error("product '{0}' not found")]
    NotFound(ProductId),

    /// A conflict occurred (e.g. duplicate SKU, restock of a discontinued
    /// product).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A stock change would drive the quantity below zero.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },
}

impl InventoryError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_exposes_available_quantity() {
        let err = InventoryError::insufficient_stock(10, 5);
        let msg = err.to_string();
        assert!(msg.contains("5"), "message should mention availability: {msg}");
        assert!(msg.contains("10"), "message should mention the request: {msg}");
    }

    #[test]
    fn not_found_message_carries_the_id() {
        let id = ProductId::new();
        let err = InventoryError::not_found(id);
        assert!(err.to_string().contains(&id.to_string()));
    }
}
