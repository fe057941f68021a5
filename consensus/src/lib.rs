//! Pure weighted-consensus math shared by the rating aggregator and the
//! corruption-report state machine.
//!
//! Everything here is deterministic and side-effect free: influence weights
//! from citizen trust attributes, weighted averages over rating sets, quorum
//! tallies over verification votes, and the one central place that decides
//! report status transitions. Centralizing the threshold logic keeps the
//! rounding and comparison rules from diverging between components.

pub mod tally;
pub mod transition;
pub mod weight;

pub use tally::{
    weighted_average, weighted_quorum, QuorumOutcome, QuorumTally, QuorumVote, WeightedValue,
};
pub use transition::next_report_status;
pub use weight::{level_multiplier, rating_weight, verification_weight};
