use serde::{Deserialize, Serialize};

/// Batch lifecycle status.
///
/// `Hold` and `Destroyed` are reachable in the state space but no exposed
/// operation currently drives them; they are reserved for future actions
/// and must stay in the enum and the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Good,
    Hold,
    Recalled,
    Destroyed,
}

impl Default for BatchStatus {
    fn default() -> Self {
        BatchStatus::Good
    }
}

impl BatchStatus {
    /// The lifecycle transition table. Exhaustive so that adding a status
    /// is a compile-time-checked change.
    pub fn can_transition_to(self, next: BatchStatus) -> bool {
        match self {
            BatchStatus::Good => matches!(next, BatchStatus::Hold | BatchStatus::Recalled),
            BatchStatus::Hold => matches!(next, BatchStatus::Good | BatchStatus::Recalled),
            BatchStatus::Recalled => matches!(next, BatchStatus::Destroyed),
            BatchStatus::Destroyed => false,
        }
    }

    /// Whether a lot-wide recall moves a batch in this status to `Recalled`.
    ///
    /// Recalled and Destroyed batches are left untouched by the cascade.
    pub fn is_recallable(self) -> bool {
        matches!(self, BatchStatus::Good | BatchStatus::Hold)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, BatchStatus::Destroyed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Good => "Good",
            BatchStatus::Hold => "Hold",
            BatchStatus::Recalled => "Recalled",
            BatchStatus::Destroyed => "Destroyed",
        }
    }
}

impl core::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BatchStatus; 4] = [
        BatchStatus::Good,
        BatchStatus::Hold,
        BatchStatus::Recalled,
        BatchStatus::Destroyed,
    ];

    #[test]
    fn transition_table_matches_the_lifecycle() {
        assert!(BatchStatus::Good.can_transition_to(BatchStatus::Hold));
        assert!(BatchStatus::Good.can_transition_to(BatchStatus::Recalled));
        assert!(!BatchStatus::Good.can_transition_to(BatchStatus::Destroyed));
        assert!(!BatchStatus::Good.can_transition_to(BatchStatus::Good));

        assert!(BatchStatus::Hold.can_transition_to(BatchStatus::Good));
        assert!(BatchStatus::Hold.can_transition_to(BatchStatus::Recalled));
        assert!(!BatchStatus::Hold.can_transition_to(BatchStatus::Destroyed));

        assert!(BatchStatus::Recalled.can_transition_to(BatchStatus::Destroyed));
        assert!(!BatchStatus::Recalled.can_transition_to(BatchStatus::Good));
        assert!(!BatchStatus::Recalled.can_transition_to(BatchStatus::Hold));

        for next in ALL {
            assert!(!BatchStatus::Destroyed.can_transition_to(next));
        }
    }

    #[test]
    fn recallable_covers_exactly_good_and_hold() {
        assert!(BatchStatus::Good.is_recallable());
        assert!(BatchStatus::Hold.is_recallable());
        assert!(!BatchStatus::Recalled.is_recallable());
        assert!(!BatchStatus::Destroyed.is_recallable());
    }

    #[test]
    fn default_status_is_good() {
        assert_eq!(BatchStatus::default(), BatchStatus::Good);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn any_status() -> impl Strategy<Value = BatchStatus> {
            prop::sample::select(ALL.to_vec())
        }

        proptest! {
            /// Property: no sequence of allowed transitions leaves a
            /// terminal state.
            #[test]
            fn terminal_states_are_absorbing(
                steps in prop::collection::vec(any_status(), 1..32)
            ) {
                let mut current = BatchStatus::Good;
                for next in steps {
                    if current.can_transition_to(next) {
                        current = next;
                    }
                    if current.is_terminal() {
                        // Once terminal, every further transition is denied.
                        for candidate in ALL {
                            prop_assert!(!current.can_transition_to(candidate));
                        }
                    }
                }
            }

            /// Property: a recalled batch can never move back to an
            /// operational status (monotone toward terminal).
            #[test]
            fn recall_is_monotone(
                steps in prop::collection::vec(any_status(), 1..32)
            ) {
                let mut current = BatchStatus::Good;
                let mut recalled_seen = false;
                for next in steps {
                    if current.can_transition_to(next) {
                        current = next;
                    }
                    if current == BatchStatus::Recalled {
                        recalled_seen = true;
                    }
                    if recalled_seen {
                        prop_assert!(matches!(
                            current,
                            BatchStatus::Recalled | BatchStatus::Destroyed
                        ));
                    }
                }
            }
        }
    }
}
