use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{ProductId, TransactionId};

/// What kind of stock movement a ledger entry records.
///
/// The service writes `Restock`, `Sale`, and `Adjustment`; `Return` and
/// `Damage` are part of the vocabulary for adjustment intent carried by the
/// reason text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Restock,
    Sale,
    Adjustment,
    Return,
    Damage,
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            TransactionKind::Restock => "Restock",
            TransactionKind::Sale => "Sale",
            TransactionKind::Adjustment => "Adjustment",
            TransactionKind::Return => "Return",
            TransactionKind::Damage => "Damage",
        };
        f.write_str(label)
    }
}

/// One immutable entry in the stock ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockTransaction {
    pub id: TransactionId,
    pub product_id: ProductId,
    pub kind: TransactionKind,
    /// Signed quantity change: positive for increases, negative for decreases.
    pub delta: i64,
    pub reason: String,
    pub performed_by: String,
    pub occurred_at: DateTime<Utc>,
}

/// Ordered, append-only record of every stock-quantity change.
///
/// Entries are never mutated or removed once written. Appends are stamped
/// with `Utc::now()`, so insertion order is chronological order — the
/// reverse walk in [`TransactionLedger::history_for`] and
/// [`TransactionLedger::recent`] is the descending-timestamp order, and it
/// stays deterministic even when consecutive entries share a timestamp.
#[derive(Debug, Default)]
pub struct TransactionLedger {
    entries: Vec<StockTransaction>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entry with `occurred_at = now`.
    ///
    /// The ledger trusts its caller for referential validity — it does not
    /// re-check the registry.
    pub fn record(
        &mut self,
        product_id: ProductId,
        kind: TransactionKind,
        delta: i64,
        reason: impl Into<String>,
        performed_by: impl Into<String>,
    ) -> &StockTransaction {
        let index = self.entries.len();
        self.entries.push(StockTransaction {
            id: TransactionId::new(),
            product_id,
            kind,
            delta,
            reason: reason.into(),
            performed_by: performed_by.into(),
            occurred_at: Utc::now(),
        });
        &self.entries[index]
    }

    /// Entries for one product, most recent first.
    pub fn history_for(&self, product_id: ProductId) -> Vec<&StockTransaction> {
        self.entries
            .iter()
            .rev()
            .filter(|tx| tx.product_id == product_id)
            .collect()
    }

    /// The most recent `count` entries across all products, most recent
    /// first. Returns everything if fewer exist.
    pub fn recent(&self, count: usize) -> Vec<&StockTransaction> {
        self.entries.iter().rev().take(count).collect()
    }

    /// Net quantity change recorded for one product.
    pub fn delta_sum_for(&self, product_id: ProductId) -> i64 {
        self.entries
            .iter()
            .filter(|tx| tx.product_id == product_id)
            .map(|tx| tx.delta)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only iteration in insertion (chronological) order.
    pub fn iter(&self) -> impl Iterator<Item = &StockTransaction> {
        self.entries.iter()
    }
}
