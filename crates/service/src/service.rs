//! Public operation surface and recall cascade.
//!
//! Every mutating operation takes the write lock for its whole duration,
//! so mutations are linearizable (one call fully completes, including all
//! history appends and index updates, before the next begins) and the
//! recall cascade is never observable half-applied. Reads take the read
//! lock and return cloned snapshots.

use std::sync::RwLock;

use chrono::Utc;

use tracelot_auth::{require_admin, require_owner, require_registered, require_role};
use tracelot_core::{ActorId, LotCode, ProductId, TraceError, TraceResult};
use tracelot_events::{EventBus, InMemoryEventBus, Subscription};
use tracelot_ledger::{BatchLedger, BatchStatus, HistoryEntry, LotIndex, ProductBatch};
use tracelot_registry::{Participant, ParticipantRegistry, Role};

use crate::notification::{
    BatchCreated, BatchRecalled, BatchTransferred, Notification, ParticipantRegistered,
};

/// All mutable state behind the service lock.
///
/// Grouped in one struct so a single write guard covers the registry, the
/// ledger, the lot index and the counter together; no operation can leave
/// them mutually inconsistent.
#[derive(Debug)]
struct TraceState {
    registry: ParticipantRegistry,
    ledger: BatchLedger,
    lot_index: LotIndex,
    next_product_id: ProductId,
}

/// The coordinating service instance.
///
/// Owns the process-wide state (admin identity, registry, ledger, lot
/// index, product-id counter) with explicit initialization and no reset
/// operation. The admin identity is fixed for the service lifetime; there
/// is no admin transfer.
pub struct TraceService<B> {
    admin: ActorId,
    state: RwLock<TraceState>,
    bus: B,
}

impl TraceService<InMemoryEventBus<Notification>> {
    /// Construct with the in-process bus.
    pub fn in_memory(admin: ActorId, admin_name: impl Into<String>) -> Self {
        Self::new(admin, admin_name, InMemoryEventBus::new())
    }
}

impl<B> TraceService<B>
where
    B: EventBus<Notification>,
{
    /// Construct the service, fixing `admin` as the sole admin identity
    /// and auto-registering it with role `Manufacturer`.
    pub fn new(admin: ActorId, admin_name: impl Into<String>, bus: B) -> Self {
        let mut registry = ParticipantRegistry::new();
        // Cannot fail: the registry is empty at this point.
        let _ = registry.register(admin, admin_name, Role::Manufacturer);

        Self {
            admin,
            state: RwLock::new(TraceState {
                registry,
                ledger: BatchLedger::new(),
                lot_index: LotIndex::new(),
                next_product_id: ProductId::new(1),
            }),
            bus,
        }
    }

    /// Subscribe to the outbound notification stream.
    pub fn subscribe(&self) -> Subscription<Notification> {
        self.bus.subscribe()
    }

    /// The fixed admin identity.
    pub fn admin(&self) -> ActorId {
        self.admin
    }

    // ── mutations ────────────────────────────────────────────────────────

    /// Register a participant. Admin only; an identifier registers once.
    pub fn register_participant(
        &self,
        caller: ActorId,
        id: ActorId,
        name: impl Into<String>,
        role: Role,
    ) -> TraceResult<()> {
        let name = name.into();
        let notification = {
            let mut state = self.state.write().map_err(|_| TraceError::Poisoned)?;

            require_admin(caller, self.admin)?;
            state.registry.register(id, name.clone(), role)?;

            Notification::ParticipantRegistered(ParticipantRegistered {
                identifier: id,
                name: name.clone(),
                role,
                occurred_at: Utc::now(),
            })
        };

        tracing::info!(participant = %id, %role, "participant registered");
        self.notify(notification);
        Ok(())
    }

    /// Create a batch under `lot_code`. Farm role only.
    ///
    /// Allocates the next product id; a rejected call consumes no id.
    pub fn create_batch(&self, caller: ActorId, lot_code: LotCode) -> TraceResult<ProductId> {
        let (product_id, notification) = {
            let mut state = self.state.write().map_err(|_| TraceError::Poisoned)?;

            require_role(caller, Role::Farm, &state.registry)?;

            let product_id = state.next_product_id;
            let creator_name = state.registry.get(caller).name;
            let batch = ProductBatch::create(
                product_id,
                lot_code.clone(),
                caller,
                creator_name,
                Utc::now(),
            );

            state.ledger.insert(batch);
            state.lot_index.append(lot_code.clone(), product_id);
            state.next_product_id = product_id.next();

            (
                product_id,
                Notification::BatchCreated(BatchCreated {
                    product_id,
                    lot_code,
                    creator: caller,
                    occurred_at: Utc::now(),
                }),
            )
        };

        tracing::info!(%product_id, "batch created");
        self.notify(notification);
        Ok(product_id)
    }

    /// Transfer a batch to a registered recipient.
    ///
    /// Preconditions in order: caller registered, caller owns the batch
    /// (an unknown product id has no owner), recipient registered, batch
    /// in `Good` status.
    pub fn transfer_batch(
        &self,
        caller: ActorId,
        product_id: ProductId,
        new_owner: ActorId,
    ) -> TraceResult<()> {
        let notification = {
            let mut state = self.state.write().map_err(|_| TraceError::Poisoned)?;

            require_registered(caller, &state.registry)?;
            require_owner(
                caller,
                state.ledger.get(product_id).map(|b| b.current_owner()),
            )?;
            if !state.registry.is_registered(new_owner) {
                return Err(TraceError::UnknownRecipient);
            }

            let recipient_name = state.registry.get(new_owner).name;
            let Some(batch) = state.ledger.get_mut(product_id) else {
                // Unreachable after the owner check; keep the typed error
                // rather than panicking.
                return Err(TraceError::NotOwner);
            };
            batch.transfer_to(new_owner, recipient_name, Utc::now())?;

            Notification::BatchTransferred(BatchTransferred {
                product_id,
                from: caller,
                to: new_owner,
                occurred_at: Utc::now(),
            })
        };

        tracing::info!(%product_id, to = %new_owner, "batch transferred");
        self.notify(notification);
        Ok(())
    }

    /// Recall every batch under `lot_code`. Admin only.
    ///
    /// Cascades in creation order; batches already `Recalled` or
    /// `Destroyed` are left untouched, so re-triggering a recall is a
    /// no-op for them but still succeeds. Exactly one `BatchRecalled`
    /// notification goes out per successful invocation, after the full
    /// cascade.
    pub fn trigger_recall(&self, caller: ActorId, lot_code: LotCode) -> TraceResult<()> {
        let (recalled, notification) = {
            let mut state = self.state.write().map_err(|_| TraceError::Poisoned)?;

            require_admin(caller, self.admin)?;
            if !state.lot_index.has_batches(&lot_code) {
                return Err(TraceError::no_batches_for_lot(lot_code.as_str()));
            }

            let admin_name = state.registry.get(self.admin).name;
            let product_ids = state.lot_index.products(&lot_code).to_vec();

            let mut recalled = 0usize;
            for product_id in product_ids {
                if let Some(batch) = state.ledger.get_mut(product_id) {
                    if batch.recall(self.admin, admin_name.clone(), Utc::now()) {
                        recalled += 1;
                    }
                }
            }

            (
                recalled,
                Notification::BatchRecalled(BatchRecalled {
                    lot_code: lot_code.clone(),
                    triggered_by: self.admin,
                    occurred_at: Utc::now(),
                }),
            )
        };

        tracing::info!(lot = %lot_code, recalled, "lot recall completed");
        self.notify(notification);
        Ok(())
    }

    // ── reads ────────────────────────────────────────────────────────────

    /// Current status of a batch; `Good` for unknown ids (reads never
    /// fail — callers must treat id 0 / unknown ids as "does not exist").
    pub fn product_status(&self, product_id: ProductId) -> BatchStatus {
        self.read_state(|state| state.ledger.status(product_id))
    }

    /// Snapshot of a batch's provenance trail; empty for unknown ids.
    pub fn product_history(&self, product_id: ProductId) -> Vec<HistoryEntry> {
        self.read_state(|state| state.ledger.history(product_id))
    }

    /// Whether a batch was ever created under this id.
    pub fn product_exists(&self, product_id: ProductId) -> bool {
        self.read_state(|state| state.ledger.contains(product_id))
    }

    /// Participant record; the default (never-registered) record for
    /// unknown identifiers.
    pub fn participant(&self, id: ActorId) -> Participant {
        self.read_state(|state| state.registry.get(id))
    }

    fn read_state<T>(&self, f: impl FnOnce(&TraceState) -> T) -> T {
        // State is only ever mutated through complete, validated operations,
        // so a poisoned lock still holds consistent data.
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        f(&state)
    }

    fn notify(&self, notification: Notification) {
        // Best-effort: the ledger history is the durable record, the bus is
        // a one-way stream for external observers.
        if let Err(err) = self.bus.publish(notification) {
            tracing::warn!(?err, "notification publish failed");
        }
    }
}
