//! Report filing and verification voting.

use crate::error::ReportError;
use crate::transition::{decide, ReportEffect};
use civica_consensus::{verification_weight, weighted_quorum, QuorumVote};
use civica_store::{CorruptionReport, ReportVerification, StoreTxn};
use civica_types::{
    params, CitizenId, OfficialId, ReportCategory, ReportId, ReportSeverity, ReportStatus,
    Timestamp,
};
use serde::{Deserialize, Serialize};

/// A corruption report as submitted, shape-validated by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportSubmission {
    pub official: OfficialId,
    pub reporter: CitizenId,
    pub title: String,
    pub description: String,
    pub category: ReportCategory,
    pub severity: ReportSeverity,
    pub evidence_files: Vec<String>,
    pub location: Option<String>,
    pub estimated_amount: Option<f64>,
    pub incident_at: Option<Timestamp>,
}

/// What a verification vote did.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationOutcome {
    pub verification: ReportVerification,
    /// The report after recomputation and any status transition.
    pub report: CorruptionReport,
    /// The effects that were applied alongside the vote.
    pub effects: Vec<ReportEffect>,
}

/// Engine for the corruption report lifecycle.
pub struct ReportEngine;

impl ReportEngine {
    /// File a new report against an official.
    ///
    /// Requires the reporter to be at least `Verified`. The quorum size is
    /// fixed from the severity at filing time and never re-derived.
    pub fn file_report(
        &self,
        txn: &mut dyn StoreTxn,
        submission: ReportSubmission,
        now: Timestamp,
    ) -> Result<CorruptionReport, ReportError> {
        txn.get_official(&submission.official)?
            .filter(|o| o.is_active)
            .ok_or_else(|| ReportError::OfficialNotFound(submission.official.clone()))?;

        let reporter = txn
            .get_citizen(&submission.reporter)?
            .ok_or_else(|| ReportError::CitizenNotFound(submission.reporter.clone()))?;
        if !reporter.verification_level.can_file_reports() {
            return Err(ReportError::ReporterNotVerified(submission.reporter.clone()));
        }

        let report = CorruptionReport {
            id: txn.next_report_id()?,
            official: submission.official,
            reporter: submission.reporter,
            title: submission.title,
            description: submission.description,
            category: submission.category,
            severity: submission.severity,
            status: ReportStatus::Pending,
            required_verifications: submission.severity.required_verifications(),
            community_score: 0.0,
            verification_count: 0,
            evidence_files: submission.evidence_files,
            location: submission.location,
            estimated_amount: submission.estimated_amount,
            incident_at: submission.incident_at,
            submitted_at: now,
        };
        txn.put_report(&report)?;

        tracing::info!(
            report = %report.id,
            official = %report.official,
            severity = ?report.severity,
            required = report.required_verifications,
            "corruption report filed"
        );

        Ok(report)
    }

    /// Cast a verification vote on a pending report.
    ///
    /// One transaction covers the vote insert, the recomputation over the
    /// report's full verification set, the status transition and its
    /// effects, and the verifier's reward. A repeat vote from the same
    /// citizen is rejected — verification votes are never updated in place,
    /// unlike rating re-submission.
    pub fn cast_verification(
        &self,
        txn: &mut dyn StoreTxn,
        report_id: &ReportId,
        citizen_id: &CitizenId,
        is_valid: bool,
        comment: Option<String>,
        now: Timestamp,
    ) -> Result<VerificationOutcome, ReportError> {
        let mut report = txn
            .get_report(report_id)?
            .ok_or_else(|| ReportError::ReportNotFound(report_id.clone()))?;
        if report.status != ReportStatus::Pending {
            return Err(ReportError::ReportClosed {
                report: report_id.clone(),
                status: report.status,
            });
        }

        let citizen = txn
            .get_citizen(citizen_id)?
            .ok_or_else(|| ReportError::CitizenNotFound(citizen_id.clone()))?;
        if !citizen.verification_level.can_verify_reports() {
            return Err(ReportError::VerifierNotTrusted(citizen_id.clone()));
        }

        if txn
            .verifications_for_report(report_id)?
            .iter()
            .any(|v| &v.citizen == citizen_id)
        {
            return Err(ReportError::AlreadyVerified {
                report: report_id.clone(),
                citizen: citizen_id.clone(),
            });
        }

        let verification = ReportVerification {
            report: report_id.clone(),
            citizen: citizen_id.clone(),
            is_valid,
            weight: verification_weight(citizen.verification_level),
            comment,
            verified_at: now,
        };
        txn.insert_verification(&verification)?;

        let verifications = txn.verifications_for_report(report_id)?;
        let votes: Vec<QuorumVote> = verifications
            .iter()
            .map(|v| QuorumVote {
                weight: v.weight,
                positive: v.is_valid,
            })
            .collect();
        let tally = weighted_quorum(
            &votes,
            report.required_verifications,
            params::VERIFY_THRESHOLD,
            params::DISMISS_THRESHOLD,
        );

        let (next_status, effects) =
            decide(report.status, &tally, &report.official, citizen_id, is_valid);

        report.community_score = tally.score;
        report.verification_count = tally.count;
        report.status = next_status;
        txn.put_report(&report)?;

        for effect in &effects {
            match effect {
                ReportEffect::PenalizeOfficial {
                    official,
                    avg_reputation_delta,
                    transparency_delta,
                } => {
                    txn.adjust_official_scores(
                        official,
                        *avg_reputation_delta,
                        *transparency_delta,
                    )?;
                }
                ReportEffect::RewardVerifier { citizen, points } => {
                    txn.add_reputation(citizen, *points)?;
                }
            }
        }

        tracing::info!(
            report = %report.id,
            status = ?report.status,
            community_score = report.community_score,
            verification_count = report.verification_count,
            "verification recorded"
        );

        Ok(VerificationOutcome {
            verification,
            report,
            effects,
        })
    }

    /// Reports filtered by status and/or severity, newest first.
    pub fn reports(
        &self,
        txn: &dyn StoreTxn,
        status: Option<ReportStatus>,
        severity: Option<ReportSeverity>,
    ) -> Result<Vec<CorruptionReport>, ReportError> {
        let mut reports: Vec<CorruptionReport> = txn
            .reports()?
            .into_iter()
            .filter(|r| status.is_none_or(|s| r.status == s))
            .filter(|r| severity.is_none_or(|s| r.severity == s))
            .collect();
        reports.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        Ok(reports)
    }

    /// Reports still collecting verification votes, newest first.
    pub fn pending_reports(
        &self,
        txn: &dyn StoreTxn,
    ) -> Result<Vec<CorruptionReport>, ReportError> {
        self.reports(txn, Some(ReportStatus::Pending), None)
    }
}
