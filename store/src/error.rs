use civica_types::FailureKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("duplicate key: {0}")]
    Duplicate(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Map onto the engine-wide failure taxonomy.
    ///
    /// `Duplicate` is how a backend's unique-key constraint rejects the
    /// losing writer of a race; it surfaces to callers as a conflict.
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound(_) => FailureKind::NotFound,
            Self::Duplicate(_) => FailureKind::Conflict,
            Self::Backend(_) => FailureKind::Storage,
        }
    }
}
