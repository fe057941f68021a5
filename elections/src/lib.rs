//! Vote ledger — enforces one vote per (election, citizen), maintains
//! candidate tallies, and computes results with percentages.
//!
//! Idempotency here is rejection, not deduplication: a second vote attempt
//! from the same citizen is an error and leaves every tally untouched.

pub mod error;
pub mod ledger;
pub mod results;

pub use error::ElectionError;
pub use ledger::{ElectionPhase, VoteLedger};
pub use results::{CandidateTally, ElectionResults};
