//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type TraceResult<T> = Result<T, TraceError>;

/// Domain-level error.
///
/// Every variant is deterministic and caller-reportable: an operation either
/// fully applies or rejects with one of these before touching any state.
/// There are no transient/retryable failure modes in this core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// Caller is not the fixed admin identity.
    #[error("caller is not the admin")]
    NotAdmin,

    /// Caller has never been registered as a participant.
    #[error("caller is not a registered participant")]
    NotRegistered,

    /// Caller is registered but lacks the role required for this action.
    #[error("caller role does not permit this action")]
    NotAuthorized,

    /// Caller is not the current owner of the batch.
    #[error("caller is not the current owner of the batch")]
    NotOwner,

    /// The participant identifier is already registered.
    #[error("participant is already registered")]
    AlreadyRegistered,

    /// The transfer recipient has never been registered.
    #[error("transfer recipient is not a registered participant")]
    UnknownRecipient,

    /// The batch is not in a status that permits the requested action.
    #[error("batch status '{0}' does not permit this action")]
    InvalidState(String),

    /// No batches were ever created under the given lot code.
    #[error("no batches exist for lot '{0}'")]
    NoBatchesForLot(String),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Shared state was poisoned by a panicked writer.
    #[error("internal state lock poisoned")]
    Poisoned,
}

impl TraceError {
    pub fn invalid_state(status: impl Into<String>) -> Self {
        Self::InvalidState(status.into())
    }

    pub fn no_batches_for_lot(lot: impl Into<String>) -> Self {
        Self::NoBatchesForLot(lot.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Whether this error is an authorization failure (caller-fault) as
    /// opposed to a validity failure on an otherwise well-formed request.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAdmin | Self::NotRegistered | Self::NotAuthorized | Self::NotOwner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_split_is_stable() {
        assert!(TraceError::NotAdmin.is_authorization());
        assert!(TraceError::NotRegistered.is_authorization());
        assert!(TraceError::NotAuthorized.is_authorization());
        assert!(TraceError::NotOwner.is_authorization());

        assert!(!TraceError::AlreadyRegistered.is_authorization());
        assert!(!TraceError::UnknownRecipient.is_authorization());
        assert!(!TraceError::invalid_state("Recalled").is_authorization());
        assert!(!TraceError::no_batches_for_lot("LOT001").is_authorization());
    }

    #[test]
    fn display_carries_context() {
        let err = TraceError::no_batches_for_lot("LOT9");
        assert!(err.to_string().contains("LOT9"));

        let err = TraceError::invalid_state("Destroyed");
        assert!(err.to_string().contains("Destroyed"));
    }
}
