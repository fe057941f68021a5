use civica_store::StoreError;
use civica_types::{CandidateId, CitizenId, ElectionId, FailureKind, Timestamp};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElectionError {
    #[error("election {0} not found")]
    ElectionNotFound(ElectionId),

    #[error("candidate {candidate} does not stand in election {election}")]
    CandidateNotFound {
        election: ElectionId,
        candidate: CandidateId,
    },

    #[error("citizen {0} not found")]
    CitizenNotFound(CitizenId),

    #[error("election {0} is not active")]
    ElectionInactive(ElectionId),

    #[error("election {election} is not accepting votes at {now}")]
    OutsideVotingWindow {
        election: ElectionId,
        now: Timestamp,
    },

    #[error("citizen {citizen} already voted in election {election}")]
    AlreadyVoted {
        election: ElectionId,
        citizen: CitizenId,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ElectionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ElectionNotFound(_)
            | Self::CandidateNotFound { .. }
            | Self::CitizenNotFound(_) => FailureKind::NotFound,
            Self::ElectionInactive(_) | Self::OutsideVotingWindow { .. } => {
                FailureKind::InvalidState
            }
            Self::AlreadyVoted { .. } => FailureKind::Conflict,
            Self::Store(e) => e.kind(),
        }
    }
}
