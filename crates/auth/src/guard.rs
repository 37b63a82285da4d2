//! Guard predicates gating every mutation.
//!
//! Each predicate is a pure policy check:
//! - No IO
//! - No panics
//! - No business logic, no side effects
//!
//! Callers evaluate guards before touching any state (fail-fast, no
//! partial writes).

use tracelot_core::{ActorId, TraceError, TraceResult};
use tracelot_registry::{ParticipantRegistry, Role};

/// Pass only the fixed admin identity established at construction.
pub fn require_admin(caller: ActorId, admin: ActorId) -> TraceResult<()> {
    if caller == admin {
        Ok(())
    } else {
        Err(TraceError::NotAdmin)
    }
}

/// Pass only callers with a registered participant record.
pub fn require_registered(caller: ActorId, registry: &ParticipantRegistry) -> TraceResult<()> {
    if registry.is_registered(caller) {
        Ok(())
    } else {
        Err(TraceError::NotRegistered)
    }
}

/// Pass only registered callers holding `role`.
pub fn require_role(
    caller: ActorId,
    role: Role,
    registry: &ParticipantRegistry,
) -> TraceResult<()> {
    require_registered(caller, registry)?;
    if registry.get(caller).has_role(role) {
        Ok(())
    } else {
        Err(TraceError::NotAuthorized)
    }
}

/// Pass only the current owner of a batch.
pub fn require_owner(caller: ActorId, current_owner: Option<ActorId>) -> TraceResult<()> {
    if current_owner == Some(caller) {
        Ok(())
    } else {
        Err(TraceError::NotOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(id: ActorId, role: Role) -> ParticipantRegistry {
        let mut registry = ParticipantRegistry::new();
        registry.register(id, "Test Participant", role).unwrap();
        registry
    }

    #[test]
    fn require_admin_matches_identity_only() {
        let admin = ActorId::new();
        assert!(require_admin(admin, admin).is_ok());
        assert_eq!(require_admin(ActorId::new(), admin), Err(TraceError::NotAdmin));
    }

    #[test]
    fn require_registered_rejects_unknown_identity() {
        let farm = ActorId::new();
        let registry = registry_with(farm, Role::Farm);

        assert!(require_registered(farm, &registry).is_ok());
        assert_eq!(
            require_registered(ActorId::new(), &registry),
            Err(TraceError::NotRegistered)
        );
    }

    #[test]
    fn require_role_distinguishes_unregistered_from_wrong_role() {
        let retailer = ActorId::new();
        let registry = registry_with(retailer, Role::Retailer);

        assert_eq!(
            require_role(ActorId::new(), Role::Farm, &registry),
            Err(TraceError::NotRegistered)
        );
        assert_eq!(
            require_role(retailer, Role::Farm, &registry),
            Err(TraceError::NotAuthorized)
        );
        assert!(require_role(retailer, Role::Retailer, &registry).is_ok());
    }

    #[test]
    fn require_owner_rejects_missing_batch() {
        let caller = ActorId::new();
        assert_eq!(require_owner(caller, None), Err(TraceError::NotOwner));
        assert_eq!(
            require_owner(caller, Some(ActorId::new())),
            Err(TraceError::NotOwner)
        );
        assert!(require_owner(caller, Some(caller)).is_ok());
    }
}
