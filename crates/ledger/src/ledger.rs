use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tracelot_core::ProductId;

use crate::batch::ProductBatch;
use crate::history::HistoryEntry;
use crate::status::BatchStatus;

/// productId → batch table.
///
/// The ledger owns every batch exclusively. Reads never fail: unknown
/// product ids yield the default status and an empty history, and callers
/// must treat id 0 / unknown ids as "does not exist".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchLedger {
    batches: HashMap<ProductId, ProductBatch>,
}

impl BatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly created batch under its product id.
    pub fn insert(&mut self, batch: ProductBatch) {
        self.batches.insert(batch.product_id(), batch);
    }

    pub fn get(&self, product_id: ProductId) -> Option<&ProductBatch> {
        self.batches.get(&product_id)
    }

    pub fn get_mut(&mut self, product_id: ProductId) -> Option<&mut ProductBatch> {
        self.batches.get_mut(&product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.batches.contains_key(&product_id)
    }

    /// Current status; `Good` (the default) for unknown ids.
    pub fn status(&self, product_id: ProductId) -> BatchStatus {
        self.batches
            .get(&product_id)
            .map(|b| b.status())
            .unwrap_or_default()
    }

    /// Snapshot of the provenance trail; empty for unknown ids.
    pub fn history(&self, product_id: ProductId) -> Vec<HistoryEntry> {
        self.batches
            .get(&product_id)
            .map(|b| b.history().to_vec())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
