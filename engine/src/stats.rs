//! Platform-wide counters.

use civica_store::{StoreError, StoreTxn};
use civica_types::ReportStatus;
use serde::{Deserialize, Serialize};

/// Headline numbers for the analytics surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineStats {
    pub citizens: u64,
    pub active_officials: u64,
    pub votes_cast: u64,
    pub pending_reports: u64,
    pub verified_reports: u64,
}

pub(crate) fn collect(txn: &dyn StoreTxn) -> Result<EngineStats, StoreError> {
    Ok(EngineStats {
        citizens: txn.citizen_count()?,
        active_officials: txn.active_official_count()?,
        votes_cast: txn.vote_count()?,
        pending_reports: txn.report_count_with_status(ReportStatus::Pending)?,
        verified_reports: txn.report_count_with_status(ReportStatus::Verified)?,
    })
}
