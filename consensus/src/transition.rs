//! The central report status transition rule.

use crate::tally::{QuorumOutcome, QuorumTally};
use civica_types::ReportStatus;

/// Decide a report's next status from its current status and a fresh tally.
///
/// This is the only place in the workspace that maps tallies to statuses;
/// call sites never re-derive it. Terminal statuses are absorbing — a tally
/// can never move a report out of `Verified` or `Dismissed` (callers reject
/// votes on closed reports before ever tallying, this is the backstop).
/// An `Inconclusive` or `BelowQuorum` tally leaves the report `Pending`.
pub fn next_report_status(current: ReportStatus, tally: &QuorumTally) -> ReportStatus {
    if current.is_terminal() {
        return current;
    }
    match tally.outcome {
        QuorumOutcome::Verify => ReportStatus::Verified,
        QuorumOutcome::Dismiss => ReportStatus::Dismissed,
        QuorumOutcome::BelowQuorum | QuorumOutcome::Inconclusive => ReportStatus::Pending,
    }
}
