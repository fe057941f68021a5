//! Corruption report and verification storage traits.

use crate::StoreError;
use civica_types::{
    CitizenId, OfficialId, ReportCategory, ReportId, ReportSeverity, ReportStatus, Timestamp,
};
use serde::{Deserialize, Serialize};

/// A corruption report filed against an official.
///
/// `community_score` and `verification_count` are derived — recomputed from
/// the full verification set inside each verifying transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorruptionReport {
    pub id: ReportId,
    pub official: OfficialId,
    pub reporter: CitizenId,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub severity: ReportSeverity,
    pub status: ReportStatus,
    /// Quorum size, derived from severity at filing time.
    pub required_verifications: u32,
    /// Percentage of verification weight that voted "valid".
    pub community_score: f64,
    pub verification_count: u32,
    pub evidence_files: Vec<String>,
    pub location: Option<String>,
    pub estimated_amount: Option<f64>,
    pub incident_at: Option<Timestamp>,
    pub submitted_at: Timestamp,
}

/// One citizen's verification vote on one report.
///
/// Unique on `(report, citizen)` — creation only; a second vote from the
/// same citizen is rejected, never updated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportVerification {
    pub report: ReportId,
    pub citizen: CitizenId,
    pub is_valid: bool,
    pub weight: f64,
    pub comment: Option<String>,
    pub verified_at: Timestamp,
}

/// Report operations available inside a transaction.
pub trait ReportTxn {
    /// Allocate a fresh report id. Id generation belongs to persistence.
    fn next_report_id(&mut self) -> Result<ReportId, StoreError>;

    fn get_report(&self, id: &ReportId) -> Result<Option<CorruptionReport>, StoreError>;

    fn put_report(&mut self, report: &CorruptionReport) -> Result<(), StoreError>;

    /// All reports, unordered.
    fn reports(&self) -> Result<Vec<CorruptionReport>, StoreError>;

    fn report_count_with_status(&self, status: ReportStatus) -> Result<u64, StoreError>;

    /// Insert a verification; fails with `Duplicate` if the citizen already
    /// verified this report.
    fn insert_verification(&mut self, verification: &ReportVerification)
        -> Result<(), StoreError>;

    /// All verifications cast on a report.
    fn verifications_for_report(
        &self,
        report: &ReportId,
    ) -> Result<Vec<ReportVerification>, StoreError>;
}
