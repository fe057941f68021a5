use civica_store::StoreError;
use civica_types::{CitizenId, FailureKind, OfficialId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReputationError {
    #[error("official {0} not found or inactive")]
    OfficialNotFound(OfficialId),

    #[error("citizen {0} not found")]
    CitizenNotFound(CitizenId),

    #[error("rating value {0} outside 1..=5")]
    RatingOutOfRange(u8),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReputationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::OfficialNotFound(_) | Self::CitizenNotFound(_) => FailureKind::NotFound,
            Self::RatingOutOfRange(_) => FailureKind::InvalidState,
            Self::Store(e) => e.kind(),
        }
    }
}
