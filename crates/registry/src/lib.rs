//! Participant registry domain module.
//!
//! This crate contains business rules for supply-chain participants,
//! implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod participant;
pub mod registry;

pub use participant::{Participant, Role};
pub use registry::ParticipantRegistry;
