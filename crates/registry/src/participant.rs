use serde::{Deserialize, Serialize};

/// Supply-chain role of a participant.
///
/// `Unassigned` is the default for identities that were never registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Unassigned,
    Farm,
    Manufacturer,
    Distributor,
    Retailer,
}

impl Default for Role {
    fn default() -> Self {
        Role::Unassigned
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Unassigned => "unassigned",
            Role::Farm => "farm",
            Role::Manufacturer => "manufacturer",
            Role::Distributor => "distributor",
            Role::Retailer => "retailer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered (or never-registered) supply-chain participant.
///
/// Records are immutable after registration except for the `registered`
/// flag, which transitions false→true exactly once and is never reversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub role: Role,
    pub registered: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            registered: true,
        }
    }

    /// Whether this participant holds the given role.
    ///
    /// Never-registered records hold `Unassigned` and match no operational
    /// role.
    pub fn has_role(&self, role: Role) -> bool {
        self.registered && self.role == role
    }
}

impl Default for Participant {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: Role::default(),
            registered: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_participant_is_unregistered() {
        let p = Participant::default();
        assert!(!p.registered);
        assert_eq!(p.role, Role::Unassigned);
        assert!(p.name.is_empty());
    }

    #[test]
    fn new_participant_is_registered() {
        let p = Participant::new("Green Valley Farm", Role::Farm);
        assert!(p.registered);
        assert!(p.has_role(Role::Farm));
        assert!(!p.has_role(Role::Distributor));
    }

    #[test]
    fn unregistered_record_matches_no_operational_role() {
        let p = Participant::default();
        assert!(!p.has_role(Role::Unassigned));
        assert!(!p.has_role(Role::Farm));
    }
}
