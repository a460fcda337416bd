//! Inventory module: product registry, stock ledger, and the orchestration
//! service that keeps the two consistent.
//!
//! Every stock-mutating operation goes through [`InventoryService`], which
//! validates fully, applies the quantity change to the registry, and appends
//! the matching ledger entry — always together, never independently. A
//! failed operation leaves both containers exactly as they were.

pub mod ledger;
pub mod registry;
pub mod service;
pub mod snapshot;

pub use ledger::{StockTransaction, TransactionKind, TransactionLedger};
pub use registry::ProductRegistry;
pub use service::InventoryService;
pub use snapshot::{InventorySnapshot, InventorySummary};
