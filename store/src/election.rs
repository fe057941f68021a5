//! Election, candidate and ballot storage traits.

use crate::StoreError;
use civica_types::{CandidateId, CitizenId, ElectionId, Timestamp};
use serde::{Deserialize, Serialize};

/// An election with a fixed voting window.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Election {
    pub id: ElectionId,
    pub title: String,
    pub is_active: bool,
    pub starts_at: Timestamp,
    pub ends_at: Timestamp,
}

/// A candidate standing in one election.
///
/// `vote_count` is a derived counter: incremented exactly once per accepted
/// ballot, never decremented.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElectionCandidate {
    pub id: CandidateId,
    pub election: ElectionId,
    pub name: String,
    pub vote_count: u64,
}

/// One citizen's ballot in one election.
///
/// Unique on `(election, citizen)` — at most one vote per citizen per
/// election, ever.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BallotVote {
    pub election: ElectionId,
    pub citizen: CitizenId,
    pub candidate: CandidateId,
    pub cast_at: Timestamp,
}

/// Election operations available inside a transaction.
pub trait ElectionTxn {
    fn get_election(&self, id: &ElectionId) -> Result<Option<Election>, StoreError>;

    fn put_election(&mut self, election: &Election) -> Result<(), StoreError>;

    /// All elections, unordered.
    fn elections(&self) -> Result<Vec<Election>, StoreError>;

    /// Candidates of an election, in registration order. Backends must keep
    /// this order stable — result ranking relies on it for tie-breaking.
    fn candidates_for_election(
        &self,
        election: &ElectionId,
    ) -> Result<Vec<ElectionCandidate>, StoreError>;

    fn put_candidate(&mut self, candidate: &ElectionCandidate) -> Result<(), StoreError>;

    /// Increment a candidate's tally by exactly one.
    /// Fails with `NotFound` if the candidate does not exist.
    fn increment_vote_count(&mut self, candidate: &CandidateId) -> Result<(), StoreError>;

    /// Insert a ballot; fails with `Duplicate` if `(election, citizen)`
    /// already voted. This is the unique-key constraint that deterministically
    /// rejects the loser of a concurrent double-vote.
    fn insert_vote(&mut self, vote: &BallotVote) -> Result<(), StoreError>;

    fn get_vote(
        &self,
        election: &ElectionId,
        citizen: &CitizenId,
    ) -> Result<Option<BallotVote>, StoreError>;

    /// Total ballots across all elections.
    fn vote_count(&self) -> Result<u64, StoreError>;
}
