use civica_elections::ElectionError;
use civica_reports::ReportError;
use civica_reputation::ReputationError;
use civica_store::StoreError;
use civica_types::FailureKind;
use thiserror::Error;

/// Unified failure type of the engine facade.
///
/// Collaborators that want one error surface match on [`EngineError::kind`];
/// the wrapped errors keep the full detail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Reputation(#[from] ReputationError),

    #[error(transparent)]
    Election(#[from] ElectionError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EngineError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Reputation(e) => e.kind(),
            Self::Election(e) => e.kind(),
            Self::Report(e) => e.kind(),
            Self::Store(e) => e.kind(),
        }
    }
}
