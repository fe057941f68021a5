//! Abstract repository traits for the Civica consensus engine.
//!
//! Persistence is an external collaborator: every backend (a relational
//! store in production, the in-memory store for testing) implements these
//! traits, and the rest of the workspace depends only on them.
//!
//! The unit of isolation is [`EngineStore::atomically`] — one closure per
//! engine operation, spanning the unique-key write, the full sibling re-read
//! for the aggregate recomputation, the aggregate write-back and the citizen
//! reward increment. Backends must give each closure a consistent snapshot
//! and commit or discard it as a whole (serializable, or an equivalent
//! optimistic-retry scheme at the caller's discretion).

pub mod citizen;
pub mod election;
pub mod error;
pub mod official;
pub mod rating;
pub mod report;
pub mod txn;

pub use citizen::{Citizen, CitizenTxn};
pub use election::{BallotVote, Election, ElectionCandidate, ElectionTxn};
pub use error::StoreError;
pub use official::{Official, OfficialTxn};
pub use rating::{RatingTxn, ReputationRating};
pub use report::{CorruptionReport, ReportTxn, ReportVerification};
pub use txn::{EngineStore, StoreTxn};
