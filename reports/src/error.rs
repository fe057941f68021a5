use civica_store::StoreError;
use civica_types::{CitizenId, FailureKind, OfficialId, ReportId, ReportStatus};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report {0} not found")]
    ReportNotFound(ReportId),

    #[error("official {0} not found or inactive")]
    OfficialNotFound(OfficialId),

    #[error("citizen {0} not found")]
    CitizenNotFound(CitizenId),

    #[error("report {report} is no longer pending ({status:?})")]
    ReportClosed {
        report: ReportId,
        status: ReportStatus,
    },

    #[error("citizen {0} must be verified to file corruption reports")]
    ReporterNotVerified(CitizenId),

    #[error("citizen {0} must be trusted or guardian to verify reports")]
    VerifierNotTrusted(CitizenId),

    #[error("citizen {citizen} already verified report {report}")]
    AlreadyVerified {
        report: ReportId,
        citizen: CitizenId,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReportError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::ReportNotFound(_) | Self::OfficialNotFound(_) | Self::CitizenNotFound(_) => {
                FailureKind::NotFound
            }
            Self::ReportClosed { .. } => FailureKind::InvalidState,
            Self::ReporterNotVerified(_) | Self::VerifierNotTrusted(_) => FailureKind::Forbidden,
            Self::AlreadyVerified { .. } => FailureKind::Conflict,
            Self::Store(e) => e.kind(),
        }
    }
}
