//! The pure transition decision.
//!
//! Separating the decision from its persistence keeps the state machine
//! testable without a store: given the current status and a fresh tally,
//! `decide` returns the next status plus the side effects the caller must
//! apply atomically with the status write.

use civica_consensus::{next_report_status, QuorumTally};
use civica_types::{params, CitizenId, OfficialId, ReportStatus};
use serde::{Deserialize, Serialize};

/// A cross-entity side effect of a verification vote.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ReportEffect {
    /// The report was verified: dock the accused official. Deltas are
    /// negative; the average reputation is deliberately not clamped.
    PenalizeOfficial {
        official: OfficialId,
        avg_reputation_delta: f64,
        transparency_delta: f64,
    },
    /// Reward the citizen who cast this verification vote.
    RewardVerifier { citizen: CitizenId, points: i64 },
}

/// Decide the next status and effects after a verification vote.
///
/// The official penalty fires only on the transition *into* `Verified`;
/// every accepted vote rewards its verifier (more for flagging a report
/// valid than invalid).
pub fn decide(
    current: ReportStatus,
    tally: &QuorumTally,
    official: &OfficialId,
    verifier: &CitizenId,
    is_valid: bool,
) -> (ReportStatus, Vec<ReportEffect>) {
    let next = next_report_status(current, tally);

    let mut effects = Vec::new();
    if current == ReportStatus::Pending && next == ReportStatus::Verified {
        effects.push(ReportEffect::PenalizeOfficial {
            official: official.clone(),
            avg_reputation_delta: -params::VERIFIED_REPORT_REPUTATION_PENALTY,
            transparency_delta: -params::VERIFIED_REPORT_TRANSPARENCY_PENALTY,
        });
    }
    effects.push(ReportEffect::RewardVerifier {
        citizen: verifier.clone(),
        points: if is_valid {
            params::VERIFY_VALID_REWARD
        } else {
            params::VERIFY_INVALID_REWARD
        },
    });

    (next, effects)
}
