use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tracelot_core::ActorId;

use crate::status::BatchStatus;

/// Fixed action labels recorded in the provenance trail.
pub mod action {
    pub const BATCH_CREATED: &str = "Batch Created";
    pub const TRANSFERRED: &str = "Transferred";
    pub const PRODUCT_RECALLED: &str = "Product Recalled";
}

/// One immutable entry in a batch's provenance trail.
///
/// `actor_name` is a denormalized snapshot of the participant's name at
/// action time. This is deliberate: the trail stays readable even if the
/// participant record is altered later. Do not replace it with a live
/// join against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub occurred_at: DateTime<Utc>,
    pub actor: ActorId,
    pub actor_name: String,
    /// Batch status after the action was applied.
    pub status: BatchStatus,
    pub action: String,
}

impl HistoryEntry {
    pub fn new(
        occurred_at: DateTime<Utc>,
        actor: ActorId,
        actor_name: impl Into<String>,
        status: BatchStatus,
        action: impl Into<String>,
    ) -> Self {
        Self {
            occurred_at,
            actor,
            actor_name: actor_name.into(),
            status,
            action: action.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_keeps_the_name_snapshot() {
        let actor = ActorId::new();
        let entry = HistoryEntry::new(
            Utc::now(),
            actor,
            "Green Valley Farm",
            BatchStatus::Good,
            action::BATCH_CREATED,
        );

        assert_eq!(entry.actor, actor);
        assert_eq!(entry.actor_name, "Green Valley Farm");
        assert_eq!(entry.action, action::BATCH_CREATED);
        assert_eq!(entry.status, BatchStatus::Good);
    }
}
