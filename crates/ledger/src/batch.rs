use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tracelot_core::{ActorId, LotCode, ProductId, TraceError, TraceResult};

use crate::history::{HistoryEntry, action};
use crate::status::BatchStatus;

/// A tracked product batch and its append-only provenance trail.
///
/// The history is owned exclusively by the batch: callers only ever see
/// cloned snapshots, entries are never removed, and the first entry is
/// always the genesis record (status `Good`, action "Batch Created").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductBatch {
    product_id: ProductId,
    lot_code: LotCode,
    status: BatchStatus,
    current_owner: ActorId,
    history: Vec<HistoryEntry>,
}

impl ProductBatch {
    /// Create a batch with its genesis history entry.
    pub fn create(
        product_id: ProductId,
        lot_code: LotCode,
        owner: ActorId,
        owner_name: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            lot_code,
            status: BatchStatus::Good,
            current_owner: owner,
            history: vec![HistoryEntry::new(
                occurred_at,
                owner,
                owner_name,
                BatchStatus::Good,
                action::BATCH_CREATED,
            )],
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn lot_code(&self) -> &LotCode {
        &self.lot_code
    }

    pub fn status(&self) -> BatchStatus {
        self.status
    }

    pub fn current_owner(&self) -> ActorId {
        self.current_owner
    }

    /// Read-only view of the provenance trail.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Hand ownership to `new_owner`.
    ///
    /// Only a batch in `Good` status may move between parties. The caller
    /// is responsible for the ownership and registration guards; the batch
    /// enforces the status invariant. The appended entry records the new
    /// owner as the acting party.
    pub fn transfer_to(
        &mut self,
        new_owner: ActorId,
        new_owner_name: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> TraceResult<()> {
        if self.status != BatchStatus::Good {
            return Err(TraceError::invalid_state(self.status.as_str()));
        }

        self.current_owner = new_owner;
        self.history.push(HistoryEntry::new(
            occurred_at,
            new_owner,
            new_owner_name,
            BatchStatus::Good,
            action::TRANSFERRED,
        ));
        Ok(())
    }

    /// Apply a lot-wide recall to this batch.
    ///
    /// Returns `true` if the batch moved to `Recalled`, `false` if it was
    /// already `Recalled` or `Destroyed` and was left untouched. There is
    /// no error path: the state space guarantees the cascade cannot fail
    /// per item.
    pub fn recall(
        &mut self,
        admin: ActorId,
        admin_name: impl Into<String>,
        occurred_at: DateTime<Utc>,
    ) -> bool {
        if !self.status.is_recallable() {
            return false;
        }

        self.status = BatchStatus::Recalled;
        self.history.push(HistoryEntry::new(
            occurred_at,
            admin,
            admin_name,
            BatchStatus::Recalled,
            action::PRODUCT_RECALLED,
        ));
        true
    }
}
