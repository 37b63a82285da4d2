//! `tracelot-service` — the coordinating service instance.
//!
//! One [`TraceService`] owns all mutable state (participant registry,
//! batch ledger, lot index, product-id counter) behind a single lock and
//! exposes the public operation surface, including the lot-wide recall
//! cascade. Notifications go out on the bus after a mutation commits.

pub mod notification;
pub mod service;

pub use notification::{
    BatchCreated, BatchRecalled, BatchTransferred, Notification, ParticipantRegistered,
};
pub use service::TraceService;
