//! Corruption report enums: severity, status, category.

use crate::params;
use serde::{Deserialize, Serialize};

/// Severity of a reported incident. Drives the verification quorum size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReportSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ReportSeverity {
    /// Number of verification votes required before the report can leave
    /// `Pending`.
    pub fn required_verifications(&self) -> u32 {
        match self {
            Self::Critical => params::CRITICAL_REQUIRED_VERIFICATIONS,
            _ => params::DEFAULT_REQUIRED_VERIFICATIONS,
        }
    }
}

/// Lifecycle state of a corruption report.
///
/// Only these three states are reachable by the engine: `Pending` is the sole
/// initial state, and `Verified`/`Dismissed` are terminal. The surrounding
/// platform reserves further statuses (investigating, resolved) for a future
/// case-work workflow; they are deliberately not representable here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Collecting verification votes.
    Pending,
    /// Community quorum found the report credible.
    Verified,
    /// Community quorum found the report not credible.
    Dismissed,
}

impl ReportStatus {
    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Verified | Self::Dismissed)
    }
}

/// What kind of misconduct a report alleges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReportCategory {
    FinancialMisconduct,
    AbuseOfPower,
    ConflictOfInterest,
    Embezzlement,
    Bribery,
    Nepotism,
    MisuseOfResources,
    Other,
}
