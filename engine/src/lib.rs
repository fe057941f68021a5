//! The Civica engine facade.
//!
//! A collaborator (route handler) authenticates a citizen, then calls
//! exactly one method here per request. Every mutating method runs as a
//! single atomic transaction against the repository: the unique-key write,
//! the full sibling re-read for the aggregate recomputation, the aggregate
//! write-back and the citizen reward commit or roll back together. The
//! engine never calls outward except through the repository and never
//! blocks on network I/O.

pub mod error;
pub mod stats;
pub mod telemetry;

pub use error::EngineError;
pub use stats::EngineStats;

use civica_elections::{ElectionError, ElectionPhase, ElectionResults, VoteLedger};
use civica_reports::{ReportEngine, ReportSubmission, VerificationOutcome};
use civica_reputation::{OfficialSummary, RatingEngine, SubmitRating};
use civica_store::{
    BallotVote, CorruptionReport, Election, EngineStore, ReputationRating,
};
use civica_types::{
    CandidateId, CitizenId, Clock, ElectionId, OfficialId, ReportId, ReportSeverity,
    ReportStatus, SystemClock,
};

/// The reputation & community-consensus engine.
///
/// Generic over the repository and the clock so tests can swap in the
/// nullable implementations.
pub struct CivicEngine<S, C = SystemClock> {
    store: S,
    clock: C,
    ratings: RatingEngine,
    ballots: VoteLedger,
    casework: ReportEngine,
}

impl<S: EngineStore> CivicEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: EngineStore, C: Clock> CivicEngine<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            ratings: RatingEngine,
            ballots: VoteLedger,
            casework: ReportEngine,
        }
    }

    // ── Ratings ──────────────────────────────────────────────────────

    /// Rate an official (or revise an earlier rating).
    pub fn submit_rating(
        &self,
        submission: SubmitRating,
    ) -> Result<ReputationRating, EngineError> {
        let now = self.clock.now();
        finish(
            "submit_rating",
            self.store.atomically(|txn| {
                self.ratings
                    .submit_rating(txn, submission, now)
                    .map_err(EngineError::from)
            }),
        )
    }

    /// An official's reputation at a glance.
    pub fn official_summary(
        &self,
        official: &OfficialId,
    ) -> Result<OfficialSummary, EngineError> {
        finish(
            "official_summary",
            self.store.atomically(|txn| {
                self.ratings
                    .official_summary(txn, official)
                    .map_err(EngineError::from)
            }),
        )
    }

    // ── Elections ────────────────────────────────────────────────────

    /// Cast a single-use ballot.
    pub fn cast_vote(
        &self,
        election: &ElectionId,
        citizen: &CitizenId,
        candidate: &CandidateId,
    ) -> Result<BallotVote, EngineError> {
        let now = self.clock.now();
        finish(
            "cast_vote",
            self.store.atomically(|txn| {
                self.ballots
                    .cast_vote(txn, election, citizen, candidate, now)
                    .map_err(EngineError::from)
            }),
        )
    }

    /// Current results of an election.
    pub fn results(&self, election: &ElectionId) -> Result<ElectionResults, EngineError> {
        finish(
            "results",
            self.store.atomically(|txn| {
                self.ballots
                    .results(txn, election)
                    .map_err(EngineError::from)
            }),
        )
    }

    /// Where an election sits relative to its voting window, right now.
    pub fn election_phase(&self, election: &ElectionId) -> Result<ElectionPhase, EngineError> {
        let now = self.clock.now();
        finish(
            "election_phase",
            self.store.atomically(|txn| {
                let record = txn
                    .get_election(election)?
                    .ok_or_else(|| ElectionError::ElectionNotFound(election.clone()))
                    .map_err(EngineError::from)?;
                Ok(VoteLedger::phase(&record, now))
            }),
        )
    }

    /// All elections currently in `phase`.
    pub fn elections_in_phase(&self, phase: ElectionPhase) -> Result<Vec<Election>, EngineError> {
        let now = self.clock.now();
        finish(
            "elections_in_phase",
            self.store.atomically(|txn| {
                let mut matching: Vec<Election> = txn
                    .elections()
                    .map_err(EngineError::from)?
                    .into_iter()
                    .filter(|e| VoteLedger::phase(e, now) == phase)
                    .collect();
                matching.sort_by(|a, b| b.starts_at.cmp(&a.starts_at));
                Ok(matching)
            }),
        )
    }

    /// The ballot this citizen cast in an election, if any.
    pub fn find_vote(
        &self,
        election: &ElectionId,
        citizen: &CitizenId,
    ) -> Result<Option<BallotVote>, EngineError> {
        finish(
            "find_vote",
            self.store.atomically(|txn| {
                self.ballots
                    .find_vote(txn, election, citizen)
                    .map_err(EngineError::from)
            }),
        )
    }

    // ── Corruption reports ───────────────────────────────────────────

    /// File a corruption report against an official.
    pub fn file_report(
        &self,
        submission: ReportSubmission,
    ) -> Result<CorruptionReport, EngineError> {
        let now = self.clock.now();
        finish(
            "file_report",
            self.store.atomically(|txn| {
                self.casework
                    .file_report(txn, submission, now)
                    .map_err(EngineError::from)
            }),
        )
    }

    /// Cast a verification vote on a pending report.
    pub fn cast_verification(
        &self,
        report: &ReportId,
        citizen: &CitizenId,
        is_valid: bool,
        comment: Option<String>,
    ) -> Result<VerificationOutcome, EngineError> {
        let now = self.clock.now();
        finish(
            "cast_verification",
            self.store.atomically(|txn| {
                self.casework
                    .cast_verification(txn, report, citizen, is_valid, comment, now)
                    .map_err(EngineError::from)
            }),
        )
    }

    /// Reports filtered by status and/or severity, newest first.
    pub fn reports(
        &self,
        status: Option<ReportStatus>,
        severity: Option<ReportSeverity>,
    ) -> Result<Vec<CorruptionReport>, EngineError> {
        finish(
            "reports",
            self.store.atomically(|txn| {
                self.casework
                    .reports(txn, status, severity)
                    .map_err(EngineError::from)
            }),
        )
    }

    /// Reports still collecting verification votes, newest first.
    pub fn pending_reports(&self) -> Result<Vec<CorruptionReport>, EngineError> {
        self.reports(Some(ReportStatus::Pending), None)
    }

    // ── Analytics ────────────────────────────────────────────────────

    /// Platform-wide counters.
    pub fn stats(&self) -> Result<EngineStats, EngineError> {
        finish(
            "stats",
            self.store
                .atomically(|txn| stats::collect(txn).map_err(EngineError::from)),
        )
    }
}

fn finish<T>(operation: &'static str, result: Result<T, EngineError>) -> Result<T, EngineError> {
    match &result {
        Ok(_) => tracing::debug!(operation, "ok"),
        Err(e) => tracing::warn!(operation, kind = %e.kind(), error = %e, "rejected"),
    }
    result
}
