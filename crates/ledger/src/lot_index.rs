use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tracelot_core::{LotCode, ProductId};

/// lotCode → ordered list of product ids created under that lot.
///
/// Append-only; insertion order is creation order. Populated by the
/// ledger on batch creation and consumed by the recall cascade.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LotIndex {
    lots: HashMap<LotCode, Vec<ProductId>>,
}

impl LotIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly created batch under its lot.
    pub fn append(&mut self, lot_code: LotCode, product_id: ProductId) {
        self.lots.entry(lot_code).or_default().push(product_id);
    }

    /// Product ids under `lot_code` in creation order; empty if the lot
    /// was never used.
    pub fn products(&self, lot_code: &LotCode) -> &[ProductId] {
        self.lots.get(lot_code).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_batches(&self, lot_code: &LotCode) -> bool {
        !self.products(lot_code).is_empty()
    }
}
