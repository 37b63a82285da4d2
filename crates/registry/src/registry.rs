use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use tracelot_core::{ActorId, TraceError, TraceResult};

use crate::participant::{Participant, Role};

/// Identifier → participant table.
///
/// Writes go through [`ParticipantRegistry::register`] only; reads never
/// fail and return a default (never-registered) record for unknown
/// identifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantRegistry {
    participants: HashMap<ActorId, Participant>,
}

impl ParticipantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a participant record with `registered = true`.
    ///
    /// Admin gating happens at the service boundary; the registry itself
    /// only enforces the once-only registration invariant.
    pub fn register(
        &mut self,
        id: ActorId,
        name: impl Into<String>,
        role: Role,
    ) -> TraceResult<()> {
        if self.get(id).registered {
            return Err(TraceError::AlreadyRegistered);
        }
        self.participants.insert(id, Participant::new(name, role));
        Ok(())
    }

    /// Look up a participant. Unknown identifiers yield the default record.
    pub fn get(&self, id: ActorId) -> Participant {
        self.participants.get(&id).cloned().unwrap_or_default()
    }

    pub fn is_registered(&self, id: ActorId) -> bool {
        self.participants.get(&id).is_some_and(|p| p.registered)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_get_round_trips() {
        let mut registry = ParticipantRegistry::new();
        let id = ActorId::new();

        registry.register(id, "Green Valley Farm", Role::Farm).unwrap();

        let p = registry.get(id);
        assert!(p.registered);
        assert_eq!(p.name, "Green Valley Farm");
        assert_eq!(p.role, Role::Farm);
    }

    #[test]
    fn get_unknown_returns_default_record() {
        let registry = ParticipantRegistry::new();
        let p = registry.get(ActorId::new());
        assert!(!p.registered);
        assert_eq!(p.role, Role::Unassigned);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut registry = ParticipantRegistry::new();
        let id = ActorId::new();

        registry.register(id, "First", Role::Farm).unwrap();
        let err = registry.register(id, "Second", Role::Retailer).unwrap_err();
        assert_eq!(err, TraceError::AlreadyRegistered);

        // The original record is untouched by the rejected call.
        let p = registry.get(id);
        assert_eq!(p.name, "First");
        assert_eq!(p.role, Role::Farm);
    }

    #[test]
    fn is_registered_tracks_the_flag() {
        let mut registry = ParticipantRegistry::new();
        let id = ActorId::new();
        assert!(!registry.is_registered(id));

        registry.register(id, "Dist Co", Role::Distributor).unwrap();
        assert!(registry.is_registered(id));
    }
}
