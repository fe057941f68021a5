//! Citizen storage trait.

use crate::StoreError;
use civica_types::{CitizenId, VerificationLevel};
use serde::{Deserialize, Serialize};

/// Trust attributes of a citizen, owned by the identity subsystem.
///
/// The engine only reads these and adjusts `reputation_score` by relative
/// increments; it never sets the score absolutely and never touches the
/// verification level.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Citizen {
    pub id: CitizenId,
    /// Non-negative by invariant; grows through civic participation rewards.
    pub reputation_score: i64,
    pub verification_level: VerificationLevel,
    pub is_active: bool,
}

/// Citizen operations available inside a transaction.
pub trait CitizenTxn {
    fn get_citizen(&self, id: &CitizenId) -> Result<Option<Citizen>, StoreError>;

    fn put_citizen(&mut self, citizen: &Citizen) -> Result<(), StoreError>;

    /// Adjust a citizen's reputation score by a relative delta.
    ///
    /// Always an increment, never an absolute write, so interleaved
    /// transactions on different keys compose. Fails with `NotFound` if the
    /// citizen does not exist.
    fn add_reputation(&mut self, id: &CitizenId, delta: i64) -> Result<(), StoreError>;

    fn citizen_count(&self) -> Result<u64, StoreError>;
}
