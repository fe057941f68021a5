//! In-memory repository with snapshot transactions.
//!
//! A mutex serializes writers; each transaction runs against a clone of the
//! whole dataset, which replaces the live one only when the closure
//! succeeds. That gives every closure a consistent snapshot, all-or-nothing
//! commits, and serializable isolation — the strongest reading of the
//! engine's concurrency contract, so tests exercise the same semantics a
//! relational backend would provide.

use civica_store::{
    BallotVote, Citizen, CitizenTxn, CorruptionReport, Election, ElectionCandidate, ElectionTxn,
    EngineStore, Official, OfficialTxn, RatingTxn, ReportTxn, ReportVerification,
    ReputationRating, StoreError, StoreTxn,
};
use civica_types::{
    CandidateId, CitizenId, ElectionId, OfficialId, RatingCategory, ReportId, ReportStatus,
};
use std::collections::BTreeMap;
use std::sync::Mutex;

#[derive(Clone, Default)]
struct Dataset {
    citizens: BTreeMap<CitizenId, Citizen>,
    officials: BTreeMap<OfficialId, Official>,
    ratings: BTreeMap<(OfficialId, CitizenId, RatingCategory), ReputationRating>,
    elections: BTreeMap<ElectionId, Election>,
    /// Candidates per election, in registration order.
    candidates: BTreeMap<ElectionId, Vec<ElectionCandidate>>,
    votes: BTreeMap<(ElectionId, CitizenId), BallotVote>,
    reports: BTreeMap<ReportId, CorruptionReport>,
    verifications: BTreeMap<(ReportId, CitizenId), ReportVerification>,
    next_report_seq: u64,
}

/// A thread-safe in-memory store for testing.
pub struct MemoryStore {
    inner: Mutex<Dataset>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Dataset::default()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineStore for MemoryStore {
    fn atomically<T, E>(&self, f: impl FnOnce(&mut dyn StoreTxn) -> Result<T, E>) -> Result<T, E>
    where
        E: From<StoreError>,
    {
        let mut live = self
            .inner
            .lock()
            .map_err(|_| E::from(StoreError::Backend("store mutex poisoned".into())))?;
        let mut txn = MemoryTxn {
            data: live.clone(),
        };
        let out = f(&mut txn)?;
        *live = txn.data;
        Ok(out)
    }
}

/// One in-flight transaction: a private copy of the dataset.
struct MemoryTxn {
    data: Dataset,
}

impl CitizenTxn for MemoryTxn {
    fn get_citizen(&self, id: &CitizenId) -> Result<Option<Citizen>, StoreError> {
        Ok(self.data.citizens.get(id).cloned())
    }

    fn put_citizen(&mut self, citizen: &Citizen) -> Result<(), StoreError> {
        self.data
            .citizens
            .insert(citizen.id.clone(), citizen.clone());
        Ok(())
    }

    fn add_reputation(&mut self, id: &CitizenId, delta: i64) -> Result<(), StoreError> {
        let citizen = self
            .data
            .citizens
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        citizen.reputation_score += delta;
        Ok(())
    }

    fn citizen_count(&self) -> Result<u64, StoreError> {
        Ok(self.data.citizens.len() as u64)
    }
}

impl OfficialTxn for MemoryTxn {
    fn get_official(&self, id: &OfficialId) -> Result<Option<Official>, StoreError> {
        Ok(self.data.officials.get(id).cloned())
    }

    fn put_official(&mut self, official: &Official) -> Result<(), StoreError> {
        self.data
            .officials
            .insert(official.id.clone(), official.clone());
        Ok(())
    }

    fn adjust_official_scores(
        &mut self,
        id: &OfficialId,
        avg_reputation_delta: f64,
        transparency_delta: f64,
    ) -> Result<(), StoreError> {
        let official = self
            .data
            .officials
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        official.avg_reputation += avg_reputation_delta;
        official.transparency_score += transparency_delta;
        Ok(())
    }

    fn active_official_count(&self) -> Result<u64, StoreError> {
        Ok(self.data.officials.values().filter(|o| o.is_active).count() as u64)
    }
}

impl RatingTxn for MemoryTxn {
    fn upsert_rating(&mut self, rating: &ReputationRating) -> Result<(), StoreError> {
        let key = (
            rating.official.clone(),
            rating.citizen.clone(),
            rating.category,
        );
        self.data.ratings.insert(key, rating.clone());
        Ok(())
    }

    fn get_rating(
        &self,
        official: &OfficialId,
        citizen: &CitizenId,
        category: RatingCategory,
    ) -> Result<Option<ReputationRating>, StoreError> {
        let key = (official.clone(), citizen.clone(), category);
        Ok(self.data.ratings.get(&key).cloned())
    }

    fn ratings_for_official(
        &self,
        official: &OfficialId,
    ) -> Result<Vec<ReputationRating>, StoreError> {
        Ok(self
            .data
            .ratings
            .values()
            .filter(|r| &r.official == official)
            .cloned()
            .collect())
    }
}

impl ElectionTxn for MemoryTxn {
    fn get_election(&self, id: &ElectionId) -> Result<Option<Election>, StoreError> {
        Ok(self.data.elections.get(id).cloned())
    }

    fn put_election(&mut self, election: &Election) -> Result<(), StoreError> {
        self.data
            .elections
            .insert(election.id.clone(), election.clone());
        Ok(())
    }

    fn elections(&self) -> Result<Vec<Election>, StoreError> {
        Ok(self.data.elections.values().cloned().collect())
    }

    fn candidates_for_election(
        &self,
        election: &ElectionId,
    ) -> Result<Vec<ElectionCandidate>, StoreError> {
        Ok(self
            .data
            .candidates
            .get(election)
            .cloned()
            .unwrap_or_default())
    }

    fn put_candidate(&mut self, candidate: &ElectionCandidate) -> Result<(), StoreError> {
        let roster = self
            .data
            .candidates
            .entry(candidate.election.clone())
            .or_default();
        match roster.iter_mut().find(|c| c.id == candidate.id) {
            Some(existing) => *existing = candidate.clone(),
            None => roster.push(candidate.clone()),
        }
        Ok(())
    }

    fn increment_vote_count(&mut self, candidate: &CandidateId) -> Result<(), StoreError> {
        for roster in self.data.candidates.values_mut() {
            if let Some(c) = roster.iter_mut().find(|c| &c.id == candidate) {
                c.vote_count += 1;
                return Ok(());
            }
        }
        Err(StoreError::NotFound(candidate.to_string()))
    }

    fn insert_vote(&mut self, vote: &BallotVote) -> Result<(), StoreError> {
        let key = (vote.election.clone(), vote.citizen.clone());
        if self.data.votes.contains_key(&key) {
            return Err(StoreError::Duplicate(format!(
                "vote {}/{}",
                vote.election, vote.citizen
            )));
        }
        self.data.votes.insert(key, vote.clone());
        Ok(())
    }

    fn get_vote(
        &self,
        election: &ElectionId,
        citizen: &CitizenId,
    ) -> Result<Option<BallotVote>, StoreError> {
        let key = (election.clone(), citizen.clone());
        Ok(self.data.votes.get(&key).cloned())
    }

    fn vote_count(&self) -> Result<u64, StoreError> {
        Ok(self.data.votes.len() as u64)
    }
}

impl ReportTxn for MemoryTxn {
    fn next_report_id(&mut self) -> Result<ReportId, StoreError> {
        self.data.next_report_seq += 1;
        Ok(ReportId::new(format!("report-{}", self.data.next_report_seq)))
    }

    fn get_report(&self, id: &ReportId) -> Result<Option<CorruptionReport>, StoreError> {
        Ok(self.data.reports.get(id).cloned())
    }

    fn put_report(&mut self, report: &CorruptionReport) -> Result<(), StoreError> {
        self.data.reports.insert(report.id.clone(), report.clone());
        Ok(())
    }

    fn reports(&self) -> Result<Vec<CorruptionReport>, StoreError> {
        Ok(self.data.reports.values().cloned().collect())
    }

    fn report_count_with_status(&self, status: ReportStatus) -> Result<u64, StoreError> {
        Ok(self
            .data
            .reports
            .values()
            .filter(|r| r.status == status)
            .count() as u64)
    }

    fn insert_verification(
        &mut self,
        verification: &ReportVerification,
    ) -> Result<(), StoreError> {
        let key = (verification.report.clone(), verification.citizen.clone());
        if self.data.verifications.contains_key(&key) {
            return Err(StoreError::Duplicate(format!(
                "verification {}/{}",
                verification.report, verification.citizen
            )));
        }
        self.data.verifications.insert(key, verification.clone());
        Ok(())
    }

    fn verifications_for_report(
        &self,
        report: &ReportId,
    ) -> Result<Vec<ReportVerification>, StoreError> {
        Ok(self
            .data
            .verifications
            .values()
            .filter(|v| &v.report == report)
            .cloned()
            .collect())
    }
}
