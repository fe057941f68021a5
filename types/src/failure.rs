//! The failure taxonomy exposed to external collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of every engine failure.
///
/// Each crate's error type maps its variants onto one of these kinds so the
/// HTTP collaborator can choose a status code without matching on messages.
/// All failures are deterministic given the same inputs and state; none are
/// retried inside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    /// A referenced entity is absent or inactive.
    NotFound,
    /// The target entity exists but is not in a state accepting the operation.
    InvalidState,
    /// The citizen's verification level does not permit the operation.
    Forbidden,
    /// A unique-key constraint rejected a duplicate write.
    Conflict,
    /// The persistence collaborator failed; the caller may retry the whole
    /// transaction.
    Storage,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotFound => "not_found",
            Self::InvalidState => "invalid_state",
            Self::Forbidden => "forbidden",
            Self::Conflict => "conflict",
            Self::Storage => "storage",
        };
        f.write_str(s)
    }
}
