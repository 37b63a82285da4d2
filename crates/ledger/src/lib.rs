//! Batch ledger domain module.
//!
//! Tracks product batches through their lifecycle state machine and keeps
//! the append-only provenance trail per batch, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod batch;
pub mod history;
pub mod ledger;
pub mod lot_index;
pub mod status;

pub use batch::ProductBatch;
pub use history::{HistoryEntry, action};
pub use ledger::BatchLedger;
pub use lot_index::LotIndex;
pub use status::BatchStatus;
