use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tracelot_core::{ActorId, LotCode, ProductId};
use tracelot_events::Event;
use tracelot_registry::Role;

/// Notification: a participant was registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantRegistered {
    pub identifier: ActorId,
    pub name: String,
    pub role: Role,
    pub occurred_at: DateTime<Utc>,
}

/// Notification: a batch was created under a lot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchCreated {
    pub product_id: ProductId,
    pub lot_code: LotCode,
    pub creator: ActorId,
    pub occurred_at: DateTime<Utc>,
}

/// Notification: batch ownership moved between parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTransferred {
    pub product_id: ProductId,
    pub from: ActorId,
    pub to: ActorId,
    pub occurred_at: DateTime<Utc>,
}

/// Notification: a lot-wide recall completed.
///
/// Emitted exactly once per successful invocation, after the full
/// cascade, regardless of how many batches actually changed status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecalled {
    pub lot_code: LotCode,
    pub triggered_by: ActorId,
    pub occurred_at: DateTime<Utc>,
}

/// Outbound notifications, write-only for external observers.
///
/// The core never reads these back; the batch history is the durable
/// record of what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    ParticipantRegistered(ParticipantRegistered),
    BatchCreated(BatchCreated),
    BatchTransferred(BatchTransferred),
    BatchRecalled(BatchRecalled),
}

impl Event for Notification {
    fn event_type(&self) -> &'static str {
        match self {
            Notification::ParticipantRegistered(_) => "registry.participant.registered",
            Notification::BatchCreated(_) => "ledger.batch.created",
            Notification::BatchTransferred(_) => "ledger.batch.transferred",
            Notification::BatchRecalled(_) => "ledger.lot.recalled",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Notification::ParticipantRegistered(n) => n.occurred_at,
            Notification::BatchCreated(n) => n.occurred_at,
            Notification::BatchTransferred(n) => n.occurred_at,
            Notification::BatchRecalled(n) => n.occurred_at,
        }
    }
}
