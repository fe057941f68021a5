//! Ballot casting and election phase derivation.

use crate::error::ElectionError;
use civica_store::{BallotVote, Election, StoreTxn};
use civica_types::{params, CandidateId, CitizenId, ElectionId, Timestamp};
use serde::{Deserialize, Serialize};

/// Where an election sits relative to its voting window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectionPhase {
    /// The window has not opened yet.
    Upcoming,
    /// Accepting votes.
    Open,
    /// The window has passed, or the election was deactivated.
    Closed,
}

/// Engine for the single-use vote ledger.
pub struct VoteLedger;

impl VoteLedger {
    /// Cast a ballot.
    ///
    /// One transaction covers the ballot insert, the tally increment and the
    /// voter's reward. The `(election, citizen)` pre-check and the store's
    /// unique-key insert together guarantee a concurrent double-vote loses
    /// deterministically with a conflict, never a second row.
    pub fn cast_vote(
        &self,
        txn: &mut dyn StoreTxn,
        election_id: &ElectionId,
        citizen_id: &CitizenId,
        candidate_id: &CandidateId,
        now: Timestamp,
    ) -> Result<BallotVote, ElectionError> {
        let election = txn
            .get_election(election_id)?
            .ok_or_else(|| ElectionError::ElectionNotFound(election_id.clone()))?;

        let candidates = txn.candidates_for_election(election_id)?;
        if !candidates.iter().any(|c| &c.id == candidate_id) {
            return Err(ElectionError::CandidateNotFound {
                election: election_id.clone(),
                candidate: candidate_id.clone(),
            });
        }

        if !election.is_active {
            return Err(ElectionError::ElectionInactive(election_id.clone()));
        }
        if Self::phase(&election, now) != ElectionPhase::Open {
            return Err(ElectionError::OutsideVotingWindow {
                election: election_id.clone(),
                now,
            });
        }

        if txn.get_citizen(citizen_id)?.is_none() {
            return Err(ElectionError::CitizenNotFound(citizen_id.clone()));
        }

        if txn.get_vote(election_id, citizen_id)?.is_some() {
            return Err(ElectionError::AlreadyVoted {
                election: election_id.clone(),
                citizen: citizen_id.clone(),
            });
        }

        let vote = BallotVote {
            election: election_id.clone(),
            citizen: citizen_id.clone(),
            candidate: candidate_id.clone(),
            cast_at: now,
        };
        txn.insert_vote(&vote)?;
        txn.increment_vote_count(candidate_id)?;
        txn.add_reputation(citizen_id, params::VOTE_REWARD)?;

        tracing::debug!(
            election = %election_id,
            candidate = %candidate_id,
            "ballot accepted"
        );

        Ok(vote)
    }

    /// Derive an election's phase at `now`. A deactivated election is closed
    /// no matter where its window lies.
    pub fn phase(election: &Election, now: Timestamp) -> ElectionPhase {
        if !election.is_active {
            ElectionPhase::Closed
        } else if now < election.starts_at {
            ElectionPhase::Upcoming
        } else if now > election.ends_at {
            ElectionPhase::Closed
        } else {
            ElectionPhase::Open
        }
    }

    /// Look up the ballot a citizen cast in an election, if any.
    pub fn find_vote(
        &self,
        txn: &dyn StoreTxn,
        election_id: &ElectionId,
        citizen_id: &CitizenId,
    ) -> Result<Option<BallotVote>, ElectionError> {
        txn.get_election(election_id)?
            .ok_or_else(|| ElectionError::ElectionNotFound(election_id.clone()))?;
        Ok(txn.get_vote(election_id, citizen_id)?)
    }
}
