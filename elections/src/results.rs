//! Election results with percentages.

use crate::error::ElectionError;
use crate::ledger::VoteLedger;
use civica_store::{Election, ElectionCandidate, StoreTxn};
use civica_types::ElectionId;
use serde::{Deserialize, Serialize};

/// One candidate's standing in the results.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CandidateTally {
    pub candidate: ElectionCandidate,
    /// `vote_count / total_votes × 100`, 0 when no votes were cast.
    pub percentage: f64,
}

/// Results of one election.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElectionResults {
    pub election: Election,
    pub total_votes: u64,
    /// Descending by vote count; ties keep candidate registration order
    /// (stable sort, no secondary key).
    pub candidates: Vec<CandidateTally>,
}

impl VoteLedger {
    /// Compute the results of an election.
    pub fn results(
        &self,
        txn: &dyn StoreTxn,
        election_id: &ElectionId,
    ) -> Result<ElectionResults, ElectionError> {
        let election = txn
            .get_election(election_id)?
            .ok_or_else(|| ElectionError::ElectionNotFound(election_id.clone()))?;

        let mut candidates = txn.candidates_for_election(election_id)?;
        let total_votes: u64 = candidates.iter().map(|c| c.vote_count).sum();

        candidates.sort_by(|a, b| b.vote_count.cmp(&a.vote_count));

        let candidates = candidates
            .into_iter()
            .map(|candidate| {
                let percentage = if total_votes > 0 {
                    candidate.vote_count as f64 / total_votes as f64 * 100.0
                } else {
                    0.0
                };
                CandidateTally {
                    candidate,
                    percentage,
                }
            })
            .collect();

        Ok(ElectionResults {
            election,
            total_votes,
            candidates,
        })
    }
}
